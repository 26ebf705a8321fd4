use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    model::catalog::{CharacterDto, PlanetDto, VehicleDto},
    server::model::db::{CharacterModel, PlanetModel, UserModel, VehicleModel},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub subscription_date: NaiveDate,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            subscription_date: user.subscription_date,
        }
    }
}

/// Favorites grouped by kind, a kind is omitted when the user has none of it
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritesDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<CharacterDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<Vec<VehicleDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planets: Option<Vec<PlanetDto>>,
}

/// A user together with every record they have marked as a favorite
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub user: UserDto,
    pub favorites: FavoritesDto,
}

impl UserFavoritesDto {
    /// Builds the nested favorites view from the targets of each favorite link.
    ///
    /// Targets are expected one per link, in link order.
    pub fn new(
        user: UserModel,
        characters: Vec<CharacterModel>,
        vehicles: Vec<VehicleModel>,
        planets: Vec<PlanetModel>,
    ) -> Self {
        Self {
            user: user.into(),
            favorites: FavoritesDto {
                characters: non_empty(characters),
                vehicles: non_empty(vehicles),
                planets: non_empty(planets),
            },
        }
    }
}

fn non_empty<M, D: From<M>>(models: Vec<M>) -> Option<Vec<D>> {
    if models.is_empty() {
        return None;
    }

    Some(models.into_iter().map(D::from).collect())
}
