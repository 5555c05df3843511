use super::error::{Result, ScheduleError};
use super::navigator::Navigator;

/// Navigators in the order they were added
#[derive(Debug, Clone, Default)]
pub struct Roster {
    navigators: Vec<Navigator>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Appends a navigator, refusing a name that is already on the roster
    pub fn add(&mut self, navigator: Navigator) -> Result<()> {
        if self.get(navigator.name()).is_some() {
            return Err(ScheduleError::DuplicateName(navigator.name().to_string()));
        }
        self.navigators.push(navigator);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Navigator> {
        self.navigators.iter().find(|n| n.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Navigator> {
        self.navigators
            .iter_mut()
            .find(|n| n.name() == name)
            .ok_or_else(|| ScheduleError::UnknownNavigator(name.to_string()))
    }

    pub fn navigators(&self) -> &[Navigator] {
        &self.navigators
    }

    pub(crate) fn navigators_mut(&mut self) -> &mut [Navigator] {
        &mut self.navigators
    }

    pub fn len(&self) -> usize {
        self.navigators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.navigators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_rejects_duplicates() {
        let mut roster = Roster::new();
        roster.add(Navigator::new("Tanim")).unwrap();
        roster.add(Navigator::new("Dior")).unwrap();

        let err = roster.add(Navigator::new("Tanim")).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateName(name) if name == "Tanim"));

        let names: Vec<&str> = roster.navigators().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["Tanim", "Dior"]);
    }

    #[test]
    fn get_mut_reports_unknown_names() {
        let mut roster = Roster::new();
        assert!(matches!(
            roster.get_mut("Mike"),
            Err(ScheduleError::UnknownNavigator(_))
        ));
    }
}
