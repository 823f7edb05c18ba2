/// Compact view count: `2.5M`, `1.5K`, or the grouped integer below a thousand.
pub fn format_view_count(count: u64) -> String {
    if count >= 1_000_000 {
        scaled(count, 1_000_000, 'M')
    } else if count >= 1_000 {
        scaled(count, 1_000, 'K')
    } else {
        group_thousands(count)
    }
}

/// One decimal place of `count / divisor`. Exact halves (only possible when
/// `count % (divisor / 2) == divisor / 4`) round up, matching JavaScript's
/// `toFixed`; everything else is the correctly rounded float.
fn scaled(count: u64, divisor: u64, suffix: char) -> String {
    if count % (divisor / 2) == divisor / 4 {
        let tenths = count / (divisor / 10) + 1;
        return format!("{}.{}{}", tenths / 10, tenths % 10, suffix);
    }
    format!("{:.1}{}", count as f64 / divisor as f64, suffix)
}

/// `en-US` digit grouping: `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
