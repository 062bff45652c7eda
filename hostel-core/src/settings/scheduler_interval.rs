use serde::{de::Error, Deserialize, Deserializer};

/// A duration written as a number with a unit suffix: `45s`, `10m` or `12h`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerInterval {
    Seconds(u32),
    Minutes(u32),
    Hours(u32),
}

impl SchedulerInterval {
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let Some(unit) = s.chars().last() else {
            return Err("Empty interval".to_string());
        };
        let num: u32 = s[..s.len() - unit.len_utf8()]
            .parse()
            .map_err(|e| format!("Invalid interval {s}: {e}"))?;

        match unit {
            's' => Ok(SchedulerInterval::Seconds(num)),
            'm' => Ok(SchedulerInterval::Minutes(num)),
            'h' => Ok(SchedulerInterval::Hours(num)),
            _ => Err(format!("Invalid time unit in {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for SchedulerInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        SchedulerInterval::parse(&s).map_err(D::Error::custom)
    }
}

impl From<SchedulerInterval> for clokwerk::Interval {
    fn from(val: SchedulerInterval) -> Self {
        match val {
            SchedulerInterval::Seconds(s) => clokwerk::Interval::Seconds(s),
            SchedulerInterval::Minutes(m) => clokwerk::Interval::Minutes(m),
            SchedulerInterval::Hours(h) => clokwerk::Interval::Hours(h),
        }
    }
}

impl From<SchedulerInterval> for chrono::Duration {
    fn from(val: SchedulerInterval) -> Self {
        match val {
            SchedulerInterval::Seconds(s) => chrono::Duration::seconds(s as i64),
            SchedulerInterval::Minutes(m) => chrono::Duration::minutes(m as i64),
            SchedulerInterval::Hours(h) => chrono::Duration::hours(h as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(
            SchedulerInterval::parse("45s").unwrap(),
            SchedulerInterval::Seconds(45)
        );
        assert_eq!(
            SchedulerInterval::parse("12h").unwrap(),
            SchedulerInterval::Hours(12)
        );
        assert_eq!(
            chrono::Duration::from(SchedulerInterval::Minutes(5)),
            chrono::Duration::seconds(300)
        );
        assert!(SchedulerInterval::parse("5d").is_err());
        assert!(SchedulerInterval::parse("").is_err());
        assert!(SchedulerInterval::parse("h").is_err());
    }
}
