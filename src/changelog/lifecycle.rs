//! Lifecycle phases and entity registration descriptors

use serde::{Deserialize, Serialize};

/// Types of operations that mutate an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity is created
    Create,
    /// Entity is updated
    Update,
    /// Entity is deleted
    Delete,
}

/// A point in an entity's lifecycle the host notifies about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecyclePhase {
    /// Before an entity is inserted
    Creating,
    /// After an entity was inserted
    Created,
    /// Before a loaded entity is saved with changes
    Updating,
    /// After the changes were saved
    Updated,
    /// Before an entity is removed
    Deleting,
    /// After the entity was removed
    Deleted,
}

impl LifecyclePhase {
    /// Every phase, in the order a create-update-delete sequence fires them
    pub const ALL: [LifecyclePhase; 6] = [
        LifecyclePhase::Creating,
        LifecyclePhase::Created,
        LifecyclePhase::Updating,
        LifecyclePhase::Updated,
        LifecyclePhase::Deleting,
        LifecyclePhase::Deleted,
    ];

    /// The operation this phase belongs to
    pub fn operation(&self) -> Operation {
        match self {
            LifecyclePhase::Creating | LifecyclePhase::Created => Operation::Create,
            LifecyclePhase::Updating | LifecyclePhase::Updated => Operation::Update,
            LifecyclePhase::Deleting | LifecyclePhase::Deleted => Operation::Delete,
        }
    }

    fn bit(&self) -> u8 {
        match self {
            LifecyclePhase::Creating => 1 << 0,
            LifecyclePhase::Created => 1 << 1,
            LifecyclePhase::Updating => 1 << 2,
            LifecyclePhase::Updated => 1 << 3,
            LifecyclePhase::Deleting => 1 << 4,
            LifecyclePhase::Deleted => 1 << 5,
        }
    }
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifecyclePhase::Creating => "creating",
            LifecyclePhase::Created => "created",
            LifecyclePhase::Updating => "updating",
            LifecyclePhase::Updated => "updated",
            LifecyclePhase::Deleting => "deleting",
            LifecyclePhase::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

/// The set of lifecycle phases an entity type is logged for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No phases
    pub const NONE: Capabilities = Capabilities(0);
    /// All six phases
    pub const ALL: Capabilities = Capabilities(0b11_1111);

    /// Exactly the given phases
    pub fn only(phases: &[LifecyclePhase]) -> Self {
        phases.iter().fold(Self::NONE, |caps, phase| caps.with(*phase))
    }

    /// Both phases of each given operation
    pub fn operations(operations: &[Operation]) -> Self {
        let phases: Vec<LifecyclePhase> = LifecyclePhase::ALL
            .into_iter()
            .filter(|phase| operations.contains(&phase.operation()))
            .collect();
        Self::only(&phases)
    }

    /// Add a phase
    pub fn with(self, phase: LifecyclePhase) -> Self {
        Self(self.0 | phase.bit())
    }

    /// Remove a phase
    pub fn without(self, phase: LifecyclePhase) -> Self {
        Self(self.0 & !phase.bit())
    }

    /// Whether the phase is enabled
    pub fn contains(&self, phase: LifecyclePhase) -> bool {
        self.0 & phase.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// An entity type the host registers with the logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Short type name, used in messages and file names (e.g. "User")
    pub type_name: String,
    /// Phases to log for this type
    pub capabilities: Capabilities,
}

impl EntityDescriptor {
    /// Describe a type logged for every phase
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            capabilities: Capabilities::ALL,
        }
    }

    /// Restrict the phases logged for this type
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}
