//! Child record domain service.
//!
//! Implements the child driving ports over the child and user repositories.
//! Children belong to the parent in the session; nurses look a parent's
//! children up by email when recording a visit.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    ChildCommand, ChildPayload, ChildQuery, ChildRepository, CreateChildRequest,
    UpdateChildRequest, UserRepository,
};
use crate::domain::service_support::{map_child_repository_error, map_user_repository_error};
use crate::domain::{Child, EmailAddress, Error, PersonName};

/// Child service implementing the child driving ports.
#[derive(Clone)]
pub struct ChildService<C, U> {
    child_repo: Arc<C>,
    user_repo: Arc<U>,
}

impl<C, U> ChildService<C, U> {
    /// Create a new service over the child and user repositories.
    pub fn new(child_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            child_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl<C, U> ChildCommand for ChildService<C, U>
where
    C: ChildRepository,
    U: UserRepository,
{
    async fn create_child(&self, request: CreateChildRequest) -> Result<(), Error> {
        let first_name = PersonName::new(request.first_name)
            .map_err(|err| Error::invalid_request(format!("invalid first name: {err}")))?;
        let last_name = PersonName::new(request.last_name)
            .map_err(|err| Error::invalid_request(format!("invalid last name: {err}")))?;

        let child = Child::register(first_name, last_name, request.birthdate, request.parent_id);
        self.child_repo
            .insert(&child)
            .await
            .map_err(map_child_repository_error)
    }

    async fn update_child(&self, request: UpdateChildRequest) -> Result<(), Error> {
        let child = self
            .child_repo
            .find_by_id(request.id)
            .await
            .map_err(map_child_repository_error)?
            .ok_or_else(|| Error::not_found(format!("child {} not found", request.id)))?;

        let first_name = PersonName::new(request.first_name)
            .map_err(|err| Error::invalid_request(format!("invalid first name: {err}")))?;
        let updated = Child::new(
            child.id(),
            first_name,
            child.last_name().clone(),
            request.birthdate,
            child.parent_id(),
        );
        self.child_repo
            .update(&updated)
            .await
            .map_err(map_child_repository_error)
    }

    async fn delete_child(&self, id: Uuid) -> Result<(), Error> {
        self.child_repo
            .delete(id)
            .await
            .map_err(map_child_repository_error)
    }
}

#[async_trait]
impl<C, U> ChildQuery for ChildService<C, U>
where
    C: ChildRepository,
    U: UserRepository,
{
    async fn get_child(&self, id: Uuid) -> Result<ChildPayload, Error> {
        self.child_repo
            .find_by_id(id)
            .await
            .map_err(map_child_repository_error)?
            .map(ChildPayload::from)
            .ok_or_else(|| Error::not_found(format!("child {id} not found")))
    }

    async fn children_for_parent_email(&self, email: &str) -> Result<Vec<ChildPayload>, Error> {
        let parsed = EmailAddress::new(email)
            .map_err(|err| Error::invalid_request(format!("invalid email: {err}")))?;
        let parent = self
            .user_repo
            .find_by_email(&parsed)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| Error::not_found(format!("no parent account for {parsed}")))?;

        let children = self
            .child_repo
            .list_by_parent(parent.id())
            .await
            .map_err(map_child_repository_error)?;
        Ok(children.into_iter().map(ChildPayload::from).collect())
    }
}

#[cfg(test)]
#[path = "child_service_tests.rs"]
mod tests;
