use super::{
  compress::{compress_block_reference, compress_block_rolling},
  constants::BLOCK_LEN,
};

pub(crate) type CompressBlockFn = fn(&mut [u32; 8], &[u8; BLOCK_LEN]);

/// Available compression kernels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Sha256KernelId {
  /// Full 64-word schedule, then 64 rounds.
  Reference = 0,
  /// 16-word schedule ring updated inside the rounds.
  #[default]
  Rolling = 1,
}

pub const ALL: &[Sha256KernelId] = &[Sha256KernelId::Reference, Sha256KernelId::Rolling];

impl Sha256KernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Reference => "reference",
      Self::Rolling => "rolling",
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<Sha256KernelId> {
  ALL.iter().copied().find(|id| id.as_str() == name)
}

#[inline]
#[must_use]
pub(crate) fn compress_block_fn(id: Sha256KernelId) -> CompressBlockFn {
  match id {
    Sha256KernelId::Reference => compress_block_reference,
    Sha256KernelId::Rolling => compress_block_rolling,
  }
}
