//! User account service: registration, login verification, profiles,
//! avatars.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    constant::{is_valid_username, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH},
    data::{RecipeRepository, SubscriptionRepository, UserRepository},
    error::{auth::AuthError, user::UserError, Error},
    model::user::{RegisterUserDto, UserDto, UserWithRecipesDto},
    service::recipe::RecipeService,
    util::image::MediaStore,
};

/// Service for user accounts and profiles.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account after validating field lengths, the username
    /// pattern and email/username uniqueness.
    pub async fn register(&self, payload: RegisterUserDto) -> Result<entity::user::Model, Error> {
        if payload.email.len() > MAX_EMAIL_LENGTH {
            return Err(UserError::FieldTooLong("email", MAX_EMAIL_LENGTH).into());
        }
        if !is_plausible_email(&payload.email) {
            return Err(UserError::InvalidEmail.into());
        }
        if payload.username.len() > MAX_NAME_LENGTH {
            return Err(UserError::FieldTooLong("username", MAX_NAME_LENGTH).into());
        }
        if !is_valid_username(&payload.username) {
            return Err(UserError::InvalidUsername.into());
        }
        if payload.first_name.len() > MAX_NAME_LENGTH {
            return Err(UserError::FieldTooLong("first_name", MAX_NAME_LENGTH).into());
        }
        if payload.last_name.len() > MAX_NAME_LENGTH {
            return Err(UserError::FieldTooLong("last_name", MAX_NAME_LENGTH).into());
        }

        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_email(&payload.email).await?.is_some() {
            return Err(UserError::EmailTaken.into());
        }
        if user_repository
            .get_by_username(&payload.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameTaken.into());
        }

        let password_hash = hash_password(&payload.password)?;

        let user = user_repository
            .create(crate::data::user::NewUser {
                email: payload.email,
                username: payload.username,
                first_name: payload.first_name,
                last_name: payload.last_name,
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Verifies login credentials, returning the matching user.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the
    /// caller.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| Error::InternalError(format!("Stored password hash is invalid: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(user)
    }

    /// Retrieves a user by id
    pub async fn get_user(&self, user_id: i32) -> Result<Option<entity::user::Model>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user)
    }

    /// Retrieves a user's profile projected for the given viewer.
    pub async fn profile(&self, viewer: Option<i32>, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        let is_subscribed = match viewer {
            Some(viewer_id) => {
                SubscriptionRepository::new(self.db)
                    .exists(viewer_id, user_id)
                    .await?
            }
            None => false,
        };

        Ok(Self::to_dto(user, is_subscribed))
    }

    /// Lists users projected for the given viewer, returning the window and
    /// the total count.
    pub async fn list(
        &self,
        viewer: Option<i32>,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<UserDto>, u64), Error> {
        let (users, count) = UserRepository::new(self.db).list(limit, offset).await?;

        let followed = match viewer {
            Some(viewer_id) => {
                SubscriptionRepository::new(self.db)
                    .author_id_set(viewer_id)
                    .await?
            }
            None => Default::default(),
        };

        let users = users
            .into_iter()
            .map(|user| {
                let is_subscribed = followed.contains(&user.id);
                Self::to_dto(user, is_subscribed)
            })
            .collect();

        Ok((users, count))
    }

    /// Projects a user row for a viewer; `is_subscribed` is the viewer's
    /// relation to this user, not a stored column.
    pub fn to_dto(user: entity::user::Model, is_subscribed: bool) -> UserDto {
        UserDto {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_subscribed,
            avatar: user.avatar.as_deref().map(MediaStore::url),
        }
    }

    /// Extends a profile projection with the user's recipes, truncated to
    /// `recipes_limit`, and their total count.
    pub async fn with_recipes(
        &self,
        user: entity::user::Model,
        is_subscribed: bool,
        recipes_limit: u64,
    ) -> Result<UserWithRecipesDto, Error> {
        let recipe_repository = RecipeRepository::new(self.db);

        let recipes = recipe_repository
            .list_by_author(user.id, recipes_limit)
            .await?;
        let recipes_count = recipe_repository.count_by_author(user.id).await?;

        let user = Self::to_dto(user, is_subscribed);

        Ok(UserWithRecipesDto {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_subscribed: user.is_subscribed,
            avatar: user.avatar,
            recipes: RecipeService::summaries(recipes),
            recipes_count,
        })
    }

    /// Lists the authors the user follows, each with their recipes
    /// truncated to `recipes_limit`, returning the window and the total
    /// count.
    pub async fn subscriptions(
        &self,
        user_id: i32,
        recipes_limit: u64,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<UserWithRecipesDto>, u64), Error> {
        let (authors, count) = SubscriptionRepository::new(self.db)
            .list_authors(user_id, limit, offset)
            .await?;

        let mut results = Vec::with_capacity(authors.len());
        for author in authors {
            results.push(self.with_recipes(author, true, recipes_limit).await?);
        }

        Ok((results, count))
    }

    /// Stores a new avatar image and returns its URL; any previous avatar
    /// file is removed.
    pub async fn set_avatar(
        &self,
        media: &MediaStore,
        user_id: i32,
        data_uri: &str,
    ) -> Result<String, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        let previous = user.avatar.clone();
        let path = media.save_data_uri("avatars", data_uri).await?;

        user_repository.set_avatar(user, Some(path.clone())).await?;

        if let Some(previous) = previous {
            media.remove(&previous).await?;
        }

        Ok(MediaStore::url(&path))
    }

    /// Removes the user's avatar, deleting the stored file.
    pub async fn delete_avatar(&self, media: &MediaStore, user_id: i32) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        if let Some(previous) = user.avatar.clone() {
            user_repository.set_avatar(user, None).await?;
            media.remove(&previous).await?;
        }

        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
