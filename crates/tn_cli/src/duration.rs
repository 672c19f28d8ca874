use std::str::FromStr;
use std::time::Duration;

/// A duration written as `1h`, `30m`, `1d` or `1h15m30s`; a bare number is
/// taken as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

fn unit_seconds(unit: char) -> Option<u64> {
    match unit {
        's' => Some(1),
        'm' => Some(60),
        'h' => Some(3600),
        'd' => Some(86400),
        _ => None,
    }
}

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let too_large = || "duration too large".to_string();
        let mut total: u64 = 0;
        let mut pending: Option<u64> = None;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if let Some(digit) = c.to_digit(10) {
                let value = pending
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(digit)))
                    .ok_or_else(too_large)?;
                pending = Some(value);
                continue;
            }

            let factor = unit_seconds(c).ok_or_else(|| format!("Invalid duration unit: {}", c))?;
            let amount = pending
                .take()
                .ok_or_else(|| format!("Missing number before unit: {}", c))?;
            total = amount
                .checked_mul(factor)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(too_large)?;
        }

        match pending {
            Some(secs) => total = total.checked_add(secs).ok_or_else(too_large)?,
            None if s.trim().is_empty() => return Err("Duration must include a number".to_string()),
            None => {}
        }

        Ok(HumanDuration(Duration::from_secs(total)))
    }
}
