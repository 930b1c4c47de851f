use serde::{Deserialize, Serialize};

/// Running totals for one bucket (a week or a category).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregate {
    sum: f64,
    count: i64,
}

impl Aggregate {
    pub fn add(&mut self, hours: f64) {
        self.sum += hours;
        self.count += 1;
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Sum rounded to one decimal.
    pub fn total_hours(&self) -> f64 {
        round1(self.sum)
    }

    /// Mean of the unrounded sum, rounded to one decimal.
    pub fn avg_hours(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        round1(self.sum / self.count as f64)
    }
}

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStat {
    pub week: String,
    pub total_hours: f64,
    pub log_count: i64,
    pub avg_hours: f64,
}

impl WeeklyStat {
    pub fn new(week: String, agg: &Aggregate) -> Self {
        Self {
            week,
            total_hours: agg.total_hours(),
            log_count: agg.count(),
            avg_hours: agg.avg_hours(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub total_hours: f64,
    pub log_count: i64,
    pub avg_hours: f64,
}

impl CategoryStat {
    pub fn new(category: String, agg: &Aggregate) -> Self {
        Self {
            category,
            total_hours: agg.total_hours(),
            log_count: agg.count(),
            avg_hours: agg.avg_hours(),
        }
    }
}
