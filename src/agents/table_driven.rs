use crate::agents::Agent;
use std::collections::HashMap;
use std::hash::Hash;

/// The bluntest agent there is: remember everything perceived so far and
/// look the whole sequence up in a table. Complete for worlds small enough
/// to tabulate, useless beyond them.
#[derive(Debug, Clone)]
pub struct TableDrivenAgent<P, A> {
    /// Maps full perception histories to the action to take.
    table: HashMap<Vec<P>, A>,
    /// Everything perceived so far, in order.
    history: Vec<P>,
}

impl<P: Eq + Hash, A> TableDrivenAgent<P, A> {
    pub fn new(table: HashMap<Vec<P>, A>) -> Self {
        Self {
            table,
            history: Vec::new(),
        }
    }
}

impl<P: Eq + Hash, A: Clone> Agent for TableDrivenAgent<P, A> {
    type Perception = P;
    type Action = A;

    fn execute(&mut self, perception: P) -> Option<A> {
        self.history.push(perception);
        self.table.get(&self.history).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{Location, Status, VacuumAction, VacuumPerception};

    fn two_step_table() -> HashMap<Vec<VacuumPerception>, VacuumAction> {
        let dirty_a = VacuumPerception::new(Location::A, Status::Dirty);
        let clean_a = VacuumPerception::new(Location::A, Status::Clean);
        HashMap::from([
            (vec![dirty_a], VacuumAction::Suck),
            (vec![dirty_a, clean_a], VacuumAction::Right),
        ])
    }

    #[test]
    fn actions_depend_on_the_whole_history() {
        let mut agent = TableDrivenAgent::new(two_step_table());
        let dirty_a = VacuumPerception::new(Location::A, Status::Dirty);
        let clean_a = VacuumPerception::new(Location::A, Status::Clean);
        assert_eq!(agent.execute(dirty_a), Some(VacuumAction::Suck));
        assert_eq!(agent.execute(clean_a), Some(VacuumAction::Right));
    }

    #[test]
    fn an_untabulated_history_has_no_action() {
        let mut agent = TableDrivenAgent::new(two_step_table());
        let clean_a = VacuumPerception::new(Location::A, Status::Clean);
        // "clean" as the very first perception is not in the table.
        assert_eq!(agent.execute(clean_a), None);
    }

    #[test]
    fn a_miss_still_extends_the_history() {
        let mut agent = TableDrivenAgent::new(two_step_table());
        let dirty_a = VacuumPerception::new(Location::A, Status::Dirty);
        assert_eq!(agent.execute(dirty_a), Some(VacuumAction::Suck));
        assert_eq!(agent.execute(dirty_a), None);
        // The failed second step is part of the history now, so the
        // two-step entry no longer matches either.
        let clean_a = VacuumPerception::new(Location::A, Status::Clean);
        assert_eq!(agent.execute(clean_a), None);
    }
}
