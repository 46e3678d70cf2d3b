use tracing::debug;

use crate::backends::SqliteFactory;
use crate::{BackendFactory, EngineError, SqlBackend};

pub struct SessionConfig {
    pub factory: Box<dyn BackendFactory>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            factory: Box::new(SqliteFactory::default()),
        }
    }
}

/// One live database owned by a [`Session`].
pub struct Instance {
    backend: Box<dyn SqlBackend>,
    generation: u64,
}

impl Instance {
    /// Increments every time the owning session constructs a new instance.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn backend(&self) -> &dyn SqlBackend {
        self.backend.as_ref()
    }
}

/// Owns the lifecycle of at most one database instance.
///
/// A session is a strictly sequential pipeline: reset, load a fixture, then
/// run or evaluate. Every state change takes `&mut self`, so a session can
/// never be shared between concurrent attempts; give each logical user
/// session its own `Session`.
pub struct Session {
    factory: Box<dyn BackendFactory>,
    instance: Option<Instance>,
    generations: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            factory: config.factory,
            instance: None,
            generations: 0,
        }
    }

    /// A session backed by the default in-memory SQLite engine.
    pub fn in_memory() -> Self {
        Self::new(SessionConfig::default())
    }

    /// Returns the live instance, constructing one first if there is none.
    pub async fn init(&mut self) -> Result<&Instance, EngineError> {
        let instance = match self.instance.take() {
            Some(instance) => instance,
            None => self.open_instance().await?,
        };
        let instance: &Instance = self.instance.insert(instance);
        Ok(instance)
    }

    /// Discards the current instance, if any, and leaves a fresh one behind.
    pub async fn reset(&mut self) -> Result<(), EngineError> {
        self.close();
        let instance = self.open_instance().await?;
        self.instance = Some(instance);
        Ok(())
    }

    pub fn current(&self) -> Option<&Instance> {
        self.instance.as_ref()
    }

    /// Drops the current instance. A later `init` constructs a new one.
    pub fn close(&mut self) {
        if let Some(instance) = self.instance.take() {
            debug!(generation = instance.generation, "closing sql instance");
        }
    }

    async fn open_instance(&mut self) -> Result<Instance, EngineError> {
        let backend = self.factory.open().await?;
        self.generations += 1;
        debug!(generation = self.generations, "opened sql instance");
        Ok(Instance {
            backend,
            generation: self.generations,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}
