use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Read access to synced planetary colonies and their pins, contents and routes.
pub struct ColonyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ColonyRepository<'a> {
    /// Creates a new instance of [`ColonyRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every colony owned by a character, ordered by planet ID
    pub async fn get_many_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Vec<entity::planetary_colony::Model>, DbErr> {
        entity::prelude::PlanetaryColony::find()
            .filter(entity::planetary_colony::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::planetary_colony::Column::PlanetId)
            .all(self.db)
            .await
    }

    /// Gets the colony of a character on a specific planet
    pub async fn get_by_character_and_planet(
        &self,
        character_id: i64,
        planet_id: i64,
    ) -> Result<Option<entity::planetary_colony::Model>, DbErr> {
        entity::prelude::PlanetaryColony::find()
            .filter(entity::planetary_colony::Column::CharacterId.eq(character_id))
            .filter(entity::planetary_colony::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    /// Gets the pins of the provided colonies
    ///
    /// # Arguments
    /// - `colony_ids` - Database IDs of the colony entries
    pub async fn get_pins(
        &self,
        colony_ids: &[i32],
    ) -> Result<Vec<entity::planetary_pin::Model>, DbErr> {
        if colony_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PlanetaryPin::find()
            .filter(entity::planetary_pin::Column::ColonyId.is_in(colony_ids.iter().copied()))
            .order_by_asc(entity::planetary_pin::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the stored contents of the provided pins
    ///
    /// # Arguments
    /// - `pin_ids` - Database IDs of the pin entries, not the EVE pin IDs
    pub async fn get_pin_contents(
        &self,
        pin_ids: &[i32],
    ) -> Result<Vec<entity::planetary_pin_content::Model>, DbErr> {
        if pin_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PlanetaryPinContent::find()
            .filter(entity::planetary_pin_content::Column::PinId.is_in(pin_ids.iter().copied()))
            .order_by_asc(entity::planetary_pin_content::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the routes of the provided colonies in insertion order
    pub async fn get_routes(
        &self,
        colony_ids: &[i32],
    ) -> Result<Vec<entity::planetary_route::Model>, DbErr> {
        if colony_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PlanetaryRoute::find()
            .filter(entity::planetary_route::Column::ColonyId.is_in(colony_ids.iter().copied()))
            .order_by_asc(entity::planetary_route::Column::Id)
            .all(self.db)
            .await
    }
}
