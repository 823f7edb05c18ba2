use std::fmt;

/// Environment characteristics that make up a visitor fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintSignals {
    pub user_agent: String,
    pub language: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Minutes west of UTC (positive behind UTC).
    pub timezone_offset_minutes: i32,
    /// Checksum of something the client renders, differs across renderers.
    pub render_checksum: String,
}

impl FingerprintSignals {
    /// The `|`-joined string the hash runs over.
    pub fn joined(&self) -> String {
        [
            self.user_agent.clone(),
            self.language.clone(),
            format!("{}x{}", self.screen_width, self.screen_height),
            self.timezone_offset_minutes.to_string(),
            self.render_checksum.clone(),
        ]
        .join("|")
    }
}

/// Heuristic visitor id. Not an identity proof: collisions happen and the same
/// person gets a different id on another device or client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorFingerprint(String);

impl VisitorFingerprint {
    pub fn from_signals(signals: &FingerprintSignals) -> Self {
        Self::from_raw(&signals.joined())
    }

    /// Hash an arbitrary string the same way the signals are hashed.
    pub fn from_raw(raw: &str) -> Self {
        Self(to_base36(string_hash(raw).unsigned_abs()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Polynomial string hash over UTF-16 code units: `h = h * 31 + unit`,
/// written as shift-and-subtract with 32-bit wraparound.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32)
    })
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
