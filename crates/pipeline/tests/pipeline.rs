use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use jornada_calendar::{
    CalendarDay, CalendarError, DayState, DayType, Employment, EmploymentStatus, FixedClock, Year,
};
use jornada_cycle::{CycleOffset, CyclePart, WorkCycle};
use jornada_hours::WorkingHours;
use jornada_overlay::{Guardia, Holiday, HolidayPolicy, RejectionReason, VacationPeriod};
use jornada_pipeline::{PipelineError, PipelineInput, Stage, StageFailure, build_calendar};
use jornada_stats::{AnnualContractHours, BalanceType, Severity, StatsConfig};

const MON_FRI: [bool; 7] = [true, true, true, true, true, false, false];

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, day).unwrap()
}

fn year() -> Year {
    Year::new(2025, &FixedClock::ymd(2025, 6, 1).unwrap()).unwrap()
}

fn weekly_input() -> PipelineInput {
    PipelineInput::new(year(), WorkCycle::weekly(MON_FRI).unwrap(), WorkingHours::default())
}

fn at(days: &[CalendarDay], date: NaiveDate) -> &CalendarDay {
    days.iter().find(|x| x.date() == date).unwrap()
}

fn full_input() -> PipelineInput {
    weekly_input()
        .with_vacations(vec![
            VacationPeriod::new(d(8, 4), d(8, 22), Some("verano".into())).unwrap(),
            VacationPeriod::new(d(12, 22), d(12, 31), None).unwrap(),
        ])
        .with_holidays(vec![
            Holiday::new(d(1, 1), Some("Año Nuevo".into())),
            Holiday::new(d(1, 6), Some("Reyes".into())),
            Holiday::new(d(8, 15), Some("Asunción".into())),
            Holiday::new(d(12, 25), Some("Navidad".into())),
        ])
        .with_holiday_policy(HolidayPolicy::AutoDetect {
            respect_holidays: true,
        })
        .with_guardias(vec![
            Guardia::new(d(3, 8), 12.0, Some("guardia sábado".into())).unwrap(),
            Guardia::new(d(3, 10), 12.0, None).unwrap(),
        ])
        .with_stats_config(
            StatsConfig::new().with_contract_hours(AnnualContractHours::new(1752.0).unwrap()),
        )
}

#[test]
fn weekly_2025_scenario() {
    let calendar = build_calendar(&weekly_input()).unwrap();
    let days = calendar.days();

    assert_eq!(days.len(), 365);
    assert!(at(days, d(1, 1)).is(DayState::Trabajo));
    assert!(at(days, d(1, 4)).is(DayState::Descanso));
    assert!(at(days, d(1, 5)).is(DayState::Descanso));
    assert!(at(days, d(1, 6)).is(DayState::Trabajo));
    assert!(calendar.validation().valid);
}

#[test]
fn no_day_left_unassigned() {
    let calendar = build_calendar(&full_input()).unwrap();
    assert!(calendar.days().iter().all(|d| d.state().is_some()));
    assert_eq!(calendar.statistics().counts.unassigned, 0);
    assert_eq!(
        calendar.statistics().counts.total(),
        calendar.statistics().total_days
    );
}

#[test]
fn identical_inputs_give_identical_output() {
    let a = serde_json::to_string(&build_calendar(&full_input()).unwrap()).unwrap();
    let b = serde_json::to_string(&build_calendar(&full_input()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn holiday_on_work_day_is_worked_per_cycle() {
    let input = weekly_input().with_holidays(vec![Holiday::new(d(1, 1), Some("Año Nuevo".into()))]);
    let calendar = build_calendar(&input).unwrap();
    let jan1 = at(calendar.days(), d(1, 1));

    assert!(jan1.is(DayState::FestivoTrabajado));
    assert_abs_diff_eq!(jan1.hours_worked(), 8.0);
    assert_eq!(jan1.description(), Some("Año Nuevo"));
}

#[test]
fn holiday_on_rest_day_is_off() {
    // Wednesday is a rest day in this mask; 2025-01-01 is a Wednesday.
    let cycle = WorkCycle::weekly([true, true, false, true, true, false, false]).unwrap();
    let input = PipelineInput::new(year(), cycle, WorkingHours::default())
        .with_holidays(vec![Holiday::new(d(1, 1), None)]);
    let calendar = build_calendar(&input).unwrap();
    let jan1 = at(calendar.days(), d(1, 1));

    assert!(jan1.is(DayState::Festivo));
    assert_eq!(jan1.hours_worked(), 0.0);
}

#[test]
fn respected_holidays_vacations_and_guardias() {
    let calendar = build_calendar(&full_input()).unwrap();
    let days = calendar.days();

    assert!(at(days, d(1, 6)).is(DayState::Festivo));
    // Inside the summer vacation: vacation wins over the holiday.
    assert!(at(days, d(8, 15)).is(DayState::Vacaciones));
    assert!(at(days, d(12, 25)).is(DayState::Vacaciones));

    let saturday = at(days, d(3, 8));
    assert!(saturday.is(DayState::Guardia));
    assert_abs_diff_eq!(saturday.hours_worked(), 12.0);

    let outcome = calendar.guardias();
    assert_eq!(outcome.applied, 1);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].reason, RejectionReason::Trabajo);

    // Every contracted day counts, weekends included.
    assert_eq!(calendar.vacations().applications, 19 + 10);
    assert_eq!(calendar.statistics().counts.vacaciones, 29);
    assert!(calendar.validation().valid, "{:?}", calendar.validation().errors);
}

#[test]
fn hours_include_guardia_and_balance_is_computed() {
    let calendar = build_calendar(&full_input()).unwrap();
    let hours = calendar.hours();

    assert_eq!(hours.guardia_days_count, 1);
    assert_abs_diff_eq!(hours.guardia_hours, 12.0);
    assert_abs_diff_eq!(
        hours.total_hours,
        hours.regular_hours + hours.guardia_hours,
        epsilon = 1e-9
    );

    let balance = calendar.statistics().balance.as_ref().unwrap();
    assert_abs_diff_eq!(balance.worked_hours, hours.total_hours, epsilon = 1e-9);
    // 236 weekdays at 8h plus one 12h guardia, against 1752h.
    assert_abs_diff_eq!(hours.total_hours, 1900.0, epsilon = 1e-9);
    assert_abs_diff_eq!(balance.saldo, 148.0, epsilon = 1e-9);
    assert_eq!(balance.balance_type, BalanceType::CompanyOwes);
    assert_eq!(balance.severity, Severity::Excelente);
}

#[test]
fn parts_cycle_with_offset() {
    let cycle = WorkCycle::parts(vec![CyclePart::new(6, 3).unwrap()]).unwrap();
    let offset = CycleOffset::new(1, 4, DayType::Work).unwrap();
    let input = PipelineInput::new(year(), cycle, WorkingHours::default()).with_offset(offset);
    let calendar = build_calendar(&input).unwrap();
    let days = calendar.days();

    let states: Vec<DayState> = days[..10].iter().filter_map(|x| x.state()).collect();
    use DayState::{Descanso as R, Trabajo as W};
    assert_eq!(states, vec![W, W, W, R, R, R, W, W, W, W]);

    let first = days[0].cycle().unwrap();
    assert_eq!((first.part_number, first.day_within_part), (1, 4));
    assert_eq!(first.day_type, DayType::Work);
}

#[test]
fn mid_year_start_keeps_no_contratado() {
    let input = full_input().with_employment(Employment::started_this_year(d(3, 1)));
    let calendar = build_calendar(&input).unwrap();
    let days = calendar.days();

    assert_eq!(calendar.statistics().counts.no_contratado, 59);
    assert!(days[..59].iter().all(|x| x.is(DayState::NoContratado)));
    assert!(days[..59].iter().all(|x| x.hours_worked() == 0.0));
    assert!(calendar.validation().valid, "{:?}", calendar.validation().errors);
}

#[test]
fn missing_contract_start_fails_in_skeleton_stage() {
    let input = weekly_input()
        .with_employment(Employment::new(EmploymentStatus::StartedThisYear, None));
    let err = build_calendar(&input).unwrap_err();

    assert_eq!(err.failed_stage(), Stage::Skeleton);
    assert_eq!(
        err,
        PipelineError::Stage {
            stage: Stage::Skeleton,
            date: None,
            source: StageFailure::Calendar(CalendarError::MissingContractStart),
        }
    );
}

#[test]
fn contract_start_outside_year_names_the_date() {
    let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let input = weekly_input().with_employment(Employment::started_this_year(start));
    let err = build_calendar(&input).unwrap_err();

    match err {
        PipelineError::Stage { stage, date, .. } => {
            assert_eq!(stage, Stage::Skeleton);
            assert_eq!(date, Some(start));
        }
    }
}

#[test]
fn calendar_json_shape() {
    let json = serde_json::to_value(build_calendar(&full_input()).unwrap()).unwrap();

    assert_eq!(json["year"], 2025);
    assert_eq!(json["days"].as_array().unwrap().len(), 365);
    assert_eq!(json["days"][0]["state"], "festivo");
    assert_eq!(json["guardias"]["rejected"][0]["reason"], "trabajo");
    assert_eq!(json["validation"]["valid"], true);
}
