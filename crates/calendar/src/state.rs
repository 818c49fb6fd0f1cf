//! Day states and their overlay priority.

use serde::{Deserialize, Serialize};

/// Resolved state of a calendar day.
///
/// Every concern that depends on the state (priority, hour eligibility,
/// counting) dispatches on this enum through a single method, so adding a
/// state means touching each concern once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DayState {
    /// Scheduled work day per cycle.
    Trabajo = 0,
    /// Scheduled rest day per cycle.
    Descanso = 1,
    /// Vacation day.
    Vacaciones = 2,
    /// Public holiday, not worked.
    Festivo = 3,
    /// Public holiday, worked.
    FestivoTrabajado = 4,
    /// On-call shift on an otherwise idle day.
    Guardia = 5,
    /// Day before the employment contract start date.
    NoContratado = 6,
}

impl DayState {
    /// All states in index order.
    pub const ALL: [DayState; 7] = [
        Self::Trabajo,
        Self::Descanso,
        Self::Vacaciones,
        Self::Festivo,
        Self::FestivoTrabajado,
        Self::Guardia,
        Self::NoContratado,
    ];

    /// Returns the zero-based index of this state (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Overlay priority. A stage never replaces a state with one of lower priority.
    ///
    /// NoContratado > Vacaciones > Guardia > Festivo = FestivoTrabajado > Descanso > Trabajo
    pub fn priority(self) -> u8 {
        match self {
            Self::NoContratado => 5,
            Self::Vacaciones => 4,
            Self::Guardia => 3,
            Self::Festivo | Self::FestivoTrabajado => 2,
            Self::Descanso => 1,
            Self::Trabajo => 0,
        }
    }

    /// Whether a day in this state may hold a non-zero `hours_worked`.
    pub fn carries_hours(self) -> bool {
        match self {
            Self::Trabajo | Self::FestivoTrabajado | Self::Guardia => true,
            Self::Descanso | Self::Vacaciones | Self::Festivo | Self::NoContratado => false,
        }
    }

    /// Whether this state is a scheduled working day (Trabajo or FestivoTrabajado).
    ///
    /// Guardia is excluded: it is counted separately from scheduled work.
    pub fn is_scheduled_work(self) -> bool {
        matches!(self, Self::Trabajo | Self::FestivoTrabajado)
    }

    /// Lower-case label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trabajo => "trabajo",
            Self::Descanso => "descanso",
            Self::Vacaciones => "vacaciones",
            Self::Festivo => "festivo",
            Self::FestivoTrabajado => "festivo_trabajado",
            Self::Guardia => "guardia",
            Self::NoContratado => "no_contratado",
        }
    }
}

impl std::fmt::Display for DayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_index_matches_all_order() {
        for (i, state) in DayState::ALL.iter().enumerate() {
            assert_eq!(state.as_index(), i);
        }
    }

    #[test]
    fn priority_order() {
        use DayState::*;
        assert!(NoContratado.priority() > Vacaciones.priority());
        assert!(Vacaciones.priority() > Guardia.priority());
        assert!(Guardia.priority() > Festivo.priority());
        assert_eq!(Festivo.priority(), FestivoTrabajado.priority());
        assert!(Festivo.priority() > Descanso.priority());
        assert!(Descanso.priority() > Trabajo.priority());
    }

    #[test]
    fn hour_bearing_states() {
        let bearing: Vec<_> = DayState::ALL
            .iter()
            .copied()
            .filter(|s| s.carries_hours())
            .collect();
        assert_eq!(
            bearing,
            vec![DayState::Trabajo, DayState::FestivoTrabajado, DayState::Guardia]
        );
    }

    #[test]
    fn scheduled_work_excludes_guardia() {
        assert!(DayState::Trabajo.is_scheduled_work());
        assert!(DayState::FestivoTrabajado.is_scheduled_work());
        assert!(!DayState::Guardia.is_scheduled_work());
    }

    #[test]
    fn serde_labels_match_display() {
        for state in DayState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
        }
    }
}
