pub fn format_time(started_at: &str) -> Option<(i64, String)> {
    use chrono::*;
    let started_at = match started_at.parse::<DateTime<Utc>>() {
        Ok(started_at) => started_at,
        Err(err) => {
            log::debug!("invalid timestamp '{}': {}", started_at, err);
            return None;
        }
    };

    let seconds = (Utc::now() - started_at).num_seconds().max(0);
    let hours = (seconds / 60) / 60;
    let minutes = (seconds / 60) % 60;

    let started = if hours > 0 {
        format!(
            "{hours} hour{h_plural} {minutes} minute{m_plural}",
            h_plural = if hours > 1 { "s" } else { "" },
            m_plural = if minutes != 1 { "s" } else { "" },
        )
    } else {
        format!(
            "{minutes} minute{m_plural}",
            m_plural = if minutes != 1 { "s" } else { "" }
        )
    };

    Some((seconds, started))
}

pub fn clock() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_recent_start() {
        let started_at = (chrono::Utc::now() - chrono::Duration::minutes(90)).to_rfc3339();
        let (seconds, text) = format_time(&started_at).unwrap();
        assert!((5400..5460).contains(&seconds));
        assert_eq!(text, "1 hour 30 minutes");
    }

    #[test]
    fn reject_garbage() {
        assert_eq!(format_time("yesterday"), None);
    }
}
