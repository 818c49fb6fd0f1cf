use std::collections::BTreeSet;

use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use jornada_calendar::{CalendarDay, DayState, Employment, FixedClock, Year, generate_skeleton};
use jornada_cycle::{WorkCycle, apply_cycle};
use jornada_hours::WorkingHours;
use jornada_overlay::{
    Guardia, Holiday, HolidayPolicy, OverlayError, RejectionReason, VacationPeriod,
    apply_guardias, apply_holidays, apply_vacations,
};

const MON_FRI: [bool; 7] = [true, true, true, true, true, false, false];

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, day).unwrap()
}

fn year() -> Year {
    Year::new(2025, &FixedClock::ymd(2025, 6, 1).unwrap()).unwrap()
}

fn weekly(employment: &Employment) -> Vec<CalendarDay> {
    let days = generate_skeleton(year(), employment).unwrap();
    apply_cycle(days, &WorkCycle::weekly(MON_FRI).unwrap(), None).unwrap()
}

fn at(days: &[CalendarDay], date: NaiveDate) -> &CalendarDay {
    days.iter().find(|x| x.date() == date).unwrap()
}

#[test]
fn holiday_on_work_day_is_worked_under_auto_detect() {
    let rates = WorkingHours::new(7.5, 0.0, 0.0, 8.0).unwrap();
    let holidays = [Holiday::new(d(1, 1), Some("Año Nuevo".into()))];
    let days = apply_holidays(
        weekly(&Employment::prior_year()),
        &holidays,
        &HolidayPolicy::default(),
        &rates,
    )
    .unwrap();
    let jan1 = at(&days, d(1, 1));
    assert!(jan1.is(DayState::FestivoTrabajado));
    assert_abs_diff_eq!(jan1.hours_worked(), 8.0);
    assert_eq!(jan1.description(), Some("Año Nuevo"));
}

#[test]
fn holiday_on_rest_day_is_not_worked() {
    // Jan 4 2025 is a Saturday, a rest day under Mon-Fri.
    let holidays = [Holiday::new(d(1, 4), None)];
    let days = apply_holidays(
        weekly(&Employment::prior_year()),
        &holidays,
        &HolidayPolicy::default(),
        &WorkingHours::default(),
    )
    .unwrap();
    let day = at(&days, d(1, 4));
    assert!(day.is(DayState::Festivo));
    assert_eq!(day.hours_worked(), 0.0);
}

#[test]
fn respect_holidays_turns_work_day_off() {
    let holidays = [Holiday::new(d(1, 1), None)];
    let policy = HolidayPolicy::AutoDetect {
        respect_holidays: true,
    };
    let days = apply_holidays(
        weekly(&Employment::prior_year()),
        &holidays,
        &policy,
        &WorkingHours::default(),
    )
    .unwrap();
    assert!(at(&days, d(1, 1)).is(DayState::Festivo));
}

#[test]
fn explicit_flag_works_rest_day_holiday() {
    let holidays = [Holiday::new(d(1, 4), None), Holiday::new(d(1, 6), None)];
    let policy = HolidayPolicy::ExplicitFlag {
        worked: BTreeSet::from([d(1, 4)]),
    };
    let rates = WorkingHours::new(8.0, 0.0, 0.0, 10.0).unwrap();
    let days = apply_holidays(weekly(&Employment::prior_year()), &holidays, &policy, &rates).unwrap();
    assert!(at(&days, d(1, 4)).is(DayState::FestivoTrabajado));
    assert_eq!(at(&days, d(1, 4)).hours_worked(), 10.0);
    assert!(at(&days, d(1, 6)).is(DayState::Festivo));
}

#[test]
fn holiday_outside_year_is_ignored() {
    let before = weekly(&Employment::prior_year());
    let holidays = [Holiday::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), None)];
    let after = apply_holidays(
        before.clone(),
        &holidays,
        &HolidayPolicy::default(),
        &WorkingHours::default(),
    )
    .unwrap();
    assert_eq!(before, after);
}

#[test]
fn holiday_on_unassigned_day_fails() {
    let days = generate_skeleton(year(), &Employment::prior_year()).unwrap();
    let err = apply_holidays(
        days,
        &[Holiday::new(d(3, 19), None)],
        &HolidayPolicy::default(),
        &WorkingHours::default(),
    )
    .unwrap_err();
    assert_eq!(err, OverlayError::UnassignedDay { date: d(3, 19) });
}

#[test]
fn vacation_beats_holiday() {
    let period = VacationPeriod::new(d(12, 22), d(12, 31), Some("Navidad".into())).unwrap();
    let (days, outcome) = apply_vacations(weekly(&Employment::prior_year()), &[period]);
    assert_eq!(outcome.applications, 10);
    let days = apply_holidays(
        days,
        &[Holiday::new(d(12, 25), Some("Navidad".into()))],
        &HolidayPolicy::default(),
        &WorkingHours::default(),
    )
    .unwrap();
    assert!(at(&days, d(12, 25)).is(DayState::Vacaciones));
    assert_eq!(at(&days, d(12, 25)).hours_worked(), 0.0);
}

#[test]
fn overlapping_vacations_count_every_application() {
    let a = VacationPeriod::new(d(8, 1), d(8, 10), None).unwrap();
    let b = VacationPeriod::new(d(8, 5), d(8, 15), Some("segunda".into())).unwrap();
    let (days, outcome) = apply_vacations(weekly(&Employment::prior_year()), &[a, b]);
    assert_eq!(outcome.applications, 10 + 11);
    let unique = days.iter().filter(|x| x.is(DayState::Vacaciones)).count();
    assert_eq!(unique, 15);
    assert_eq!(at(&days, d(8, 7)).description(), Some("segunda"));
}

#[test]
fn overlays_never_touch_not_contracted_days() {
    let employment = Employment::started_this_year(d(3, 1));
    let before = weekly(&employment);
    let period = VacationPeriod::new(d(2, 20), d(3, 5), None).unwrap();
    let (days, vac) = apply_vacations(before.clone(), &[period]);
    assert_eq!(vac.skipped_not_contracted, 9);
    assert_eq!(vac.applications, 5);
    let days = apply_holidays(
        days,
        &[Holiday::new(d(1, 6), None)],
        &HolidayPolicy::default(),
        &WorkingHours::default(),
    )
    .unwrap();
    let guardia = Guardia::new(d(2, 1), 12.0, None).unwrap();
    let (days, outcome) = apply_guardias(days, &[guardia]);
    assert_eq!(outcome.rejected[0].reason, RejectionReason::NoContratado);

    for (b, a) in before.iter().zip(&days) {
        if b.is(DayState::NoContratado) {
            assert_eq!(b, a);
        }
    }
}

#[test]
fn guardia_on_rest_and_holiday_days() {
    let rates = WorkingHours::default();
    let days = apply_holidays(
        weekly(&Employment::prior_year()),
        &[Holiday::new(d(1, 6), None)],
        &HolidayPolicy::default(),
        &rates,
    )
    .unwrap();
    let guardias = [
        Guardia::new(d(1, 4), 12.0, Some("guardia sábado".into())).unwrap(), // Descanso
        Guardia::new(d(1, 6), 24.0, None).unwrap(),                          // FestivoTrabajado
        Guardia::new(d(1, 7), 5.0, None).unwrap(),                           // Trabajo
    ];
    let (days, outcome) = apply_guardias(days, &guardias);
    assert_eq!(outcome.applied, 2);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].date, d(1, 7));
    assert_eq!(outcome.rejected[0].reason, RejectionReason::Trabajo);

    assert!(at(&days, d(1, 4)).is(DayState::Guardia));
    assert_eq!(at(&days, d(1, 4)).hours_worked(), 12.0);
    assert_eq!(at(&days, d(1, 4)).description(), Some("guardia sábado"));
    assert!(at(&days, d(1, 6)).is(DayState::Guardia));
    assert_eq!(at(&days, d(1, 6)).hours_worked(), 24.0);
    assert!(at(&days, d(1, 7)).is(DayState::Trabajo));
}

#[test]
fn guardia_blocked_on_vacation_and_outside_year() {
    let period = VacationPeriod::new(d(7, 1), d(7, 31), None).unwrap();
    let (days, _) = apply_vacations(weekly(&Employment::prior_year()), &[period]);
    let guardias = [
        Guardia::new(d(7, 5), 12.0, None).unwrap(),
        Guardia::new(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(), 12.0, None).unwrap(),
        Guardia::new(d(8, 2), 12.0, None).unwrap(),
        Guardia::new(d(8, 2), 6.0, None).unwrap(),
    ];
    let (days, outcome) = apply_guardias(days, &guardias);
    let reasons: Vec<_> = outcome.rejected.iter().map(|r| r.reason).collect();
    assert_eq!(
        reasons,
        vec![
            RejectionReason::Vacaciones,
            RejectionReason::OutsideYear,
            RejectionReason::AlreadyGuardia
        ]
    );
    assert_eq!(at(&days, d(8, 2)).hours_worked(), 12.0);
}
