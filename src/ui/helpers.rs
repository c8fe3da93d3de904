/// Width of banners and horizontal rules.
pub(crate) const SCREEN_WIDTH: usize = 64;

/// A boxed banner with `title` centered inside.
pub(crate) fn banner_lines(title: &str) -> Vec<String> {
    let inner = SCREEN_WIDTH;
    let len = title.chars().count();
    let padding = inner.saturating_sub(len);
    let left = padding / 2;
    let right = padding - left;
    vec![
        format!("╔{}╗", "═".repeat(inner)),
        format!("║{}{}{}║", " ".repeat(left), title, " ".repeat(right)),
        format!("╚{}╝", "═".repeat(inner)),
    ]
}

pub(crate) fn rule() -> String {
    "─".repeat(SCREEN_WIDTH)
}

/// Today's local date in `d/m/yyyy` form, stamped on new loans.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%-d/%-m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_centered() {
        let lines = banner_lines("STATS");
        assert_eq!(lines.len(), 3);
        let middle: Vec<char> = lines[1].chars().collect();
        assert_eq!(middle.len(), SCREEN_WIDTH + 2);
        assert_eq!(lines[1].trim_matches('║').trim(), "STATS");
    }

    #[test]
    fn today_has_three_parts() {
        let date = today();
        assert_eq!(date.split('/').count(), 3);
    }
}
