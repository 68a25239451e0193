//! Weekly health calendar.

use chrono::Weekday;

const DAY_LABELS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];
/// The demo week starts on Monday the 24th.
const FIRST_DATE: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDay {
    pub label: &'static str,
    pub date: u32,
    pub is_today: bool,
    /// Marker for the injection appointment; hidden on today's cell.
    pub has_appointment: bool,
}

/// The seven-day strip, Monday first.
pub fn week_strip(today: Weekday) -> Vec<PlanDay> {
    let today_index = today.num_days_from_monday() as usize;
    let injection_index = Weekday::Thu.num_days_from_monday() as usize;
    DAY_LABELS
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let is_today = index == today_index;
            PlanDay {
                label,
                date: FIRST_DATE + index as u32,
                is_today,
                has_appointment: index == injection_index && !is_today,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_is_last_cell() {
        let strip = week_strip(Weekday::Sun);
        assert_eq!(strip.len(), 7);
        assert!(strip[6].is_today);
        assert_eq!(strip[6].date, 30);
        assert!(strip[3].has_appointment);
    }

    #[test]
    fn thursday_marker_hidden_when_today() {
        let strip = week_strip(Weekday::Thu);
        assert!(strip[3].is_today);
        assert!(strip.iter().all(|day| !day.has_appointment));
    }
}
