use colored::Colorize;

pub const GUARANTEES: &[&str] = &[
    "No machine IDs collected",
    "No hardware information tracked",
    "Sessions expire after 24 hours",
    "Contributions carry only a random session ID and a random display name",
    "You can clear your session anytime with `antea clear`",
];

pub fn print() {
    println!("{}", "🔒 Privacy Information:".bold());
    for line in GUARANTEES {
        println!("  - {}", line);
    }
}
