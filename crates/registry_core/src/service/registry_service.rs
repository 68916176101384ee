//! Registry use-case service.
//!
//! # Responsibility
//! - Provide the member lifecycle entry points (add/get/change/remove/list).
//! - Delegate persistence to repository implementations one-to-one.
//!
//! # Invariants
//! - The service owns no state beyond its repository.
//! - Repository errors are returned unchanged.

use crate::model::member::{Member, MemberId};
use crate::repo::member_repo::{MemberRepository, RepoResult};

/// Use-case service wrapper for member operations.
pub struct RegistryService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> RegistryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a new member and returns the key assigned by storage.
    ///
    /// `member` itself is not modified; callers that need the stored form
    /// fetch it again with the returned key.
    pub fn add_member(&self, member: &Member) -> RepoResult<MemberId> {
        self.repo.insert(member)
    }

    /// Gets one member by key. Missing keys surface as `RepoError::NotFound`.
    pub fn get_member(&self, id: MemberId) -> RepoResult<Member> {
        self.repo.get_by_id(id)
    }

    /// Persists edited name/ssn for an existing member.
    pub fn change_member(&self, member: &Member) -> RepoResult<()> {
        self.repo.update(member)
    }

    pub fn remove_member(&self, id: MemberId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Lists all members ordered by key.
    pub fn list_members(&self) -> RepoResult<Vec<Member>> {
        self.repo.list()
    }
}
