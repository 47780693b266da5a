use crate::agents::Agent;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use strum_macros::EnumIter;

/// The two squares of the vacuum world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Location {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Status {
    Clean,
    Dirty,
}

/// What the vacuum senses: where it is and whether that square is dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VacuumPerception {
    pub location: Location,
    pub status: Status,
}

impl VacuumPerception {
    pub fn new(location: Location, status: Status) -> Self {
        Self { location, status }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VacuumAction {
    Suck,
    Right,
    Left,
}

/// Reflex agent for the two-square vacuum world: suck dirt where it
/// stands, otherwise shuttle to the other square. Every perception has an
/// action, so this agent never answers `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexVacuumAgent;

impl ReflexVacuumAgent {
    pub fn decide(perception: &VacuumPerception) -> VacuumAction {
        match (perception.location, perception.status) {
            (_, Status::Dirty) => VacuumAction::Suck,
            (Location::A, Status::Clean) => VacuumAction::Right,
            (Location::B, Status::Clean) => VacuumAction::Left,
        }
    }
}

impl Agent for ReflexVacuumAgent {
    type Perception = VacuumPerception;
    type Action = VacuumAction;

    fn execute(&mut self, perception: VacuumPerception) -> Option<VacuumAction> {
        Some(Self::decide(&perception))
    }
}

/// Condition-action agent: an interpretation function abstracts each
/// perception into a condition, and a rule table maps conditions to
/// actions. Perceptions whose condition has no rule yield `None`.
pub struct SimpleReflexAgent<P, C, A> {
    rules: HashMap<C, A>,
    interpret: Box<dyn Fn(&P) -> C>,
}

impl<P, C: Eq + Hash, A> SimpleReflexAgent<P, C, A> {
    pub fn new(rules: HashMap<C, A>, interpret: impl Fn(&P) -> C + 'static) -> Self {
        Self {
            rules,
            interpret: Box::new(interpret),
        }
    }
}

impl<P, C: Eq + Hash, A: Clone> Agent for SimpleReflexAgent<P, C, A> {
    type Perception = P;
    type Action = A;

    fn execute(&mut self, perception: P) -> Option<A> {
        let condition = (self.interpret)(&perception);
        self.rules.get(&condition).cloned()
    }
}

impl<P, C: fmt::Debug, A: fmt::Debug> fmt::Debug for SimpleReflexAgent<P, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleReflexAgent")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// The conditions the vacuum world's rules distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VacuumCondition {
    Dirty,
    CleanAt(Location),
}

pub fn interpret_vacuum_perception(perception: &VacuumPerception) -> VacuumCondition {
    match perception.status {
        Status::Dirty => VacuumCondition::Dirty,
        Status::Clean => VacuumCondition::CleanAt(perception.location),
    }
}

pub fn vacuum_rules() -> HashMap<VacuumCondition, VacuumAction> {
    HashMap::from([
        (VacuumCondition::Dirty, VacuumAction::Suck),
        (VacuumCondition::CleanAt(Location::A), VacuumAction::Right),
        (VacuumCondition::CleanAt(Location::B), VacuumAction::Left),
    ])
}

/// The reflex vacuum behaviour expressed through the generic
/// condition-action machinery.
pub fn simple_reflex_vacuum_agent(
) -> SimpleReflexAgent<VacuumPerception, VacuumCondition, VacuumAction> {
    SimpleReflexAgent::new(vacuum_rules(), interpret_vacuum_perception)
}
