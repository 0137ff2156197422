use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Task};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Task)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables that make up an account.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - UserProfile
    /// - UserModeSettings
    /// - ExpiringToken
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(UserProfile)
            .with_table(UserModeSettings)
            .with_table(ExpiringToken)
    }

    /// Adds the account tables plus the preference catalog and its join table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_preference_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Preference)
            .with_table(UserPreference)
    }

    /// Adds everything needed for matches, quests, chats and messages.
    ///
    /// Adds the account tables followed by:
    /// - UserMatch
    /// - Quest
    /// - Chat
    /// - Message
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_match_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_match_tables(self) -> Self {
        self.with_user_tables()
            .with_table(UserMatch)
            .with_table(Quest)
            .with_table(Chat)
            .with_table(Message)
    }

    /// Adds every table in the schema.
    ///
    /// Used by HTTP-level tests where a single request may touch any table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_match_tables()
            .with_table(Task)
            .with_table(Preference)
            .with_table(UserPreference)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
