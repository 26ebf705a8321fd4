//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures are inserted in the order they were queued within each kind, so the first
/// user, planet, character, and vehicle queued each receive ID 1.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,      // first names
    planets: Vec<String>,    // names
    characters: Vec<String>, // names
    vehicles: Vec<String>,   // names
    favorite_planets: Vec<(i32, i32)>, // (user_id, planet_id)
    favorite_characters: Vec<(i32, i32)>, // (user_id, character_id)
    favorite_vehicles: Vec<(i32, i32)>, // (user_id, vehicle_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            characters: Vec::new(),
            vehicles: Vec::new(),
            favorite_planets: Vec::new(),
            favorite_characters: Vec::new(),
            favorite_vehicles: Vec::new(),
        }
    }

    /// Create every catalog table by running the real schema migrations.
    ///
    /// Includes the user, planet, character, and vehicle tables along with the three
    /// favorite tables and their unique `(user_id, <target>_id)` indexes.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement from the entity definition, which will be
    /// executed during `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided first name.
    pub fn with_user(mut self, first_name: impl Into<String>) -> Self {
        self.users.push(first_name.into());
        self
    }

    /// Insert a planet with the provided name.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a character with the provided name.
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Insert a vehicle with the provided name.
    pub fn with_vehicle(mut self, name: impl Into<String>) -> Self {
        self.vehicles.push(name.into());
        self
    }

    /// Link a user to a planet as a favorite.
    ///
    /// Both records must be queued (or otherwise exist) before `build()` runs.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Link a user to a character as a favorite.
    pub fn with_favorite_character(mut self, user_id: i32, character_id: i32) -> Self {
        self.favorite_characters.push((user_id, character_id));
        self
    }

    /// Link a user to a vehicle as a favorite.
    pub fn with_favorite_vehicle(mut self, user_id: i32, vehicle_id: i32) -> Self {
        self.favorite_vehicles.push((user_id, vehicle_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Runs migrations if catalog tables were requested, then creates custom tables
    /// 2. Inserts users, planets, characters, and vehicles
    /// 3. Inserts favorite links
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        // 1. Create tables
        if self.include_catalog_tables {
            test.with_migrations().await?;
        }

        test.with_tables(self.tables).await?;

        // 2. Insert catalog fixtures
        for first_name in self.users {
            test.catalog().insert_user(&first_name).await?;
        }

        for name in self.planets {
            test.catalog().insert_planet(&name).await?;
        }

        for name in self.characters {
            test.catalog().insert_character(&name).await?;
        }

        for name in self.vehicles {
            test.catalog().insert_vehicle(&name).await?;
        }

        // 3. Insert favorite links
        for (user_id, planet_id) in self.favorite_planets {
            test.favorite()
                .insert_favorite_planet(user_id, planet_id)
                .await?;
        }

        for (user_id, character_id) in self.favorite_characters {
            test.favorite()
                .insert_favorite_character(user_id, character_id)
                .await?;
        }

        for (user_id, vehicle_id) in self.favorite_vehicles {
            test.favorite()
                .insert_favorite_vehicle(user_id, vehicle_id)
                .await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
