pub mod models;

pub use models::{Member, MemberId};

use libris_kernel::settings::MemberSeed;

use crate::error::Result;
use crate::service::LibraryManager;

/// Register configured members with the library, in order.
pub fn seed<L: LibraryManager + ?Sized>(library: &mut L, seeds: &[MemberSeed]) -> Result<()> {
    for seed in seeds {
        library.register_member(Member::new(seed.id, &seed.name)?)?;
        tracing::debug!(member_id = seed.id, name = %seed.name, "seeded member");
    }
    Ok(())
}
