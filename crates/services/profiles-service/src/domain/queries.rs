//! Read-side queries of the profiles context.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProfileByIdQuery {
    pub profile_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProfileByEmailQuery {
    pub email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllProfilesQuery;
