/// Short axis label for a race: the part of the name before any parenthesised
/// venue, e.g. `"Italy (Monza)"` becomes `"Italy"`.
pub fn race_label(name: &str) -> &str {
    name.split('(').next().unwrap_or(name).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_venue() {
        assert_eq!(race_label("Italy (Monza)"), "Italy");
        assert_eq!(race_label("Abu Dhabi"), "Abu Dhabi");
        assert_eq!(race_label(" (Sakhir)"), "");
    }
}
