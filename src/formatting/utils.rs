pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

pub fn clean_description(desc: &str) -> String {
    // Take first non-empty line, stripped of markdown markers
    let first_line = desc
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    first_line
        .trim()
        .replace("**", "")
        .replace('*', "")
        .replace('`', "")
        .replace('#', "")
        .trim()
        .to_string()
}
