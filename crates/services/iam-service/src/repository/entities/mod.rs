//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod role;
pub mod user;
pub mod user_role;

#[allow(unused_imports)]
pub use role::{Entity as RoleEntity, Model as RoleModel};
#[allow(unused_imports)]
pub use user::{Entity as UserEntity, Model as UserModel};
#[allow(unused_imports)]
pub use user_role::{Entity as UserRoleEntity, Model as UserRoleModel};
