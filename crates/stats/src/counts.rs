//! Per-state day counts.

use jornada_calendar::{CalendarDay, DayState};
use serde::Serialize;

/// Number of days in each state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayCounts {
    /// Trabajo days.
    pub trabajo: usize,
    /// Descanso days.
    pub descanso: usize,
    /// Vacaciones days.
    pub vacaciones: usize,
    /// Festivo days.
    pub festivo: usize,
    /// FestivoTrabajado days.
    pub festivo_trabajado: usize,
    /// Guardia days.
    pub guardia: usize,
    /// NoContratado days.
    pub no_contratado: usize,
    /// Days that never received a state.
    pub unassigned: usize,
}

impl DayCounts {
    /// Counts states in a single pass.
    pub fn from_days(days: &[CalendarDay]) -> Self {
        let mut counts = Self::default();
        for day in days {
            counts.record(day.state());
        }
        counts
    }

    /// Adds one day to the tally.
    pub fn record(&mut self, state: Option<DayState>) {
        match state {
            Some(s) => *self.slot_mut(s) += 1,
            None => self.unassigned += 1,
        }
    }

    fn slot_mut(&mut self, state: DayState) -> &mut usize {
        match state {
            DayState::Trabajo => &mut self.trabajo,
            DayState::Descanso => &mut self.descanso,
            DayState::Vacaciones => &mut self.vacaciones,
            DayState::Festivo => &mut self.festivo,
            DayState::FestivoTrabajado => &mut self.festivo_trabajado,
            DayState::Guardia => &mut self.guardia,
            DayState::NoContratado => &mut self.no_contratado,
        }
    }

    /// Count for one state.
    pub fn get(&self, state: DayState) -> usize {
        match state {
            DayState::Trabajo => self.trabajo,
            DayState::Descanso => self.descanso,
            DayState::Vacaciones => self.vacaciones,
            DayState::Festivo => self.festivo,
            DayState::FestivoTrabajado => self.festivo_trabajado,
            DayState::Guardia => self.guardia,
            DayState::NoContratado => self.no_contratado,
        }
    }

    /// Sum over every state, unassigned days excluded.
    pub fn assigned(&self) -> usize {
        DayState::ALL.iter().map(|&s| self.get(s)).sum()
    }

    /// Sum over every state plus unassigned days.
    pub fn total(&self) -> usize {
        self.assigned() + self.unassigned
    }

    /// Trabajo + Guardia + FestivoTrabajado.
    pub fn laborables(&self) -> usize {
        self.trabajo + self.guardia + self.festivo_trabajado
    }

    /// Descanso + Vacaciones + Festivo.
    pub fn no_laborables(&self) -> usize {
        self.descanso + self.vacaciones + self.festivo
    }
}
