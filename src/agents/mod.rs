//! Toy agent programs: table-driven and reflex agents over tiny worlds.

mod reflex;
mod table_driven;

pub use reflex::{
    interpret_vacuum_perception, simple_reflex_vacuum_agent, vacuum_rules, Location,
    ReflexVacuumAgent, SimpleReflexAgent, Status, VacuumAction, VacuumCondition,
    VacuumPerception,
};
pub use table_driven::TableDrivenAgent;

/// An agent maps the stream of perceptions to actions, one at a time.
pub trait Agent {
    type Perception;
    type Action;

    /// Reacts to the next perception. `None` means the agent has no
    /// behaviour for what it perceived.
    fn execute(&mut self, perception: Self::Perception) -> Option<Self::Action>;
}
