//! Texts the bot posts to the guild.

pub const ADD_POINTS_USAGE: &str =
    "Poprawne użycie komendy: !aktywnosc {nickgracza} {liczba punktów}";

pub const INVALID_POINTS: &str = "Podaj poprawną liczbę punktów.";

pub const PERMISSION_DENIED: &str = "Nie masz uprawnień do używania tej komendy.";

pub const RESET_CONFIRMED: &str = "Dane punktów zostały zresetowane.";

/// First line of the scheduled leaderboard post.
pub const SCHEDULED_REPORT_INTRO: &str = "Oto zliczone punkty:";

/// Reply to a successful add points command.
pub fn points_added(name: &str, total: &str) -> String {
    format!("Gracz {} ma teraz {} punktów.", name, total)
}
