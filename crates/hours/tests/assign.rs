use approx::assert_abs_diff_eq;
use jornada_calendar::{DayState, Employment, FixedClock, Year, generate_skeleton};
use jornada_cycle::{CyclePart, WorkCycle, apply_cycle};
use jornada_hours::{WorkingHours, assign_hours, summarize_hours};

fn resolved(cycle: &WorkCycle) -> Vec<jornada_calendar::CalendarDay> {
    let year = Year::new(2025, &FixedClock::ymd(2025, 6, 1).unwrap()).unwrap();
    let days = generate_skeleton(year, &Employment::prior_year()).unwrap();
    apply_cycle(days, cycle, None).unwrap()
}

#[test]
fn weekly_mon_fri_total() {
    let cycle = WorkCycle::weekly([true, true, true, true, true, false, false]).unwrap();
    let days = assign_hours(resolved(&cycle), &WorkingHours::default()).unwrap();
    let s = summarize_hours(&days);
    // 2025 has 261 weekdays.
    assert_eq!(s.work_days_count, 261);
    assert_abs_diff_eq!(s.total_hours, 261.0 * 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(s.average_hours_per_work_day, 8.0, epsilon = 1e-9);
}

#[test]
fn weekend_buckets_are_used() {
    let cycle = WorkCycle::weekly([false, false, false, false, false, true, true]).unwrap();
    let rates = WorkingHours::new(8.0, 6.0, 4.0, 8.0).unwrap();
    let days = assign_hours(resolved(&cycle), &rates).unwrap();
    for d in &days {
        match d.weekday() {
            chrono::Weekday::Sat => assert_eq!(d.hours_worked(), 6.0),
            chrono::Weekday::Sun => assert_eq!(d.hours_worked(), 4.0),
            _ => assert_eq!(d.hours_worked(), 0.0),
        }
    }
}

#[test]
fn idempotent() {
    let cycle = WorkCycle::parts(vec![CyclePart::new(4, 2).unwrap()]).unwrap();
    let rates = WorkingHours::new(7.25, 6.5, 5.75, 9.0).unwrap();
    let once = assign_hours(resolved(&cycle), &rates).unwrap();
    let first = summarize_hours(&once);
    let twice = assign_hours(once.clone(), &rates).unwrap();
    assert_eq!(once, twice);
    assert_eq!(first, summarize_hours(&twice));
}

#[test]
fn zero_hours_outside_hour_states() {
    let cycle = WorkCycle::parts(vec![CyclePart::new(5, 2).unwrap()]).unwrap();
    let days = assign_hours(resolved(&cycle), &WorkingHours::default()).unwrap();
    assert!(
        days.iter()
            .filter(|d| !d.state().unwrap().carries_hours())
            .all(|d| d.hours_worked() == 0.0)
    );
    assert!(days.iter().any(|d| d.is(DayState::Descanso)));
}
