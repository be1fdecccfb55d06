use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

/// Rolling battle log, newest entry first, bounded to `capacity` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleLog {
    entries: Vec<String>,
    capacity: usize,
}

impl BattleLog {
    pub fn new(capacity: usize) -> Self {
        BattleLog {
            entries: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.insert(0, line.into());
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::BattleLog;

    #[test]
    fn keeps_newest_first_and_drops_oldest() {
        let mut log = BattleLog::new(8);
        for i in 0..10 {
            log.push(format!("line {i}"));
        }
        assert_eq!(log.len(), 8);
        assert_eq!(log.latest(), Some("line 9"));
        assert_eq!(log.entries().last().map(String::as_str), Some("line 2"));
    }
}
