//! Types & trait implementations to enable deriving serde::{Serialize, Deserialize}
//! on the foreign Arkworks types that we compose into complex structs.

use ark_bn254::{g1::Config as G1Config, g2::Config as G2Config, Fq2Config, FqConfig, FrConfig};
use ark_ec::short_weierstrass::Affine;
use ark_ff::{BigInt, Fp, Fp2ConfigWrapper, FpConfig, MontBackend, QuadExtField};
use core::marker::PhantomData;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DeserializeAs, SerializeAs};

use crate::types::{G1Affine, G1BaseField, G2Affine, G2BaseField};

/// Implements `SerializeAs` and `DeserializeAs` for the given remote type
/// by delegating to its local def type
macro_rules! impl_serde_as {
    ($remote_type:ty, $def_type:ty, $($generics:tt)*) => {
        impl<$($generics)*> SerializeAs<$remote_type> for $def_type {
            /// Serialize the remote type using its def type
            fn serialize_as<S>(source: &$remote_type, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                <$def_type>::serialize(source, serializer)
            }
        }

        impl<'de, $($generics)*> DeserializeAs<'de, $remote_type> for $def_type {
            /// Deserialize the remote type using its def type
            fn deserialize_as<D>(deserializer: D) -> Result<$remote_type, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$def_type>::deserialize(deserializer)
            }
        }
    };
}

/// A serde def type for [`BigInt`]
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(remote = "BigInt")]
pub struct BigIntDef<const N: usize>(#[serde_as(as = "[_; N]")] pub [u64; N]);

impl_serde_as!(BigInt<N>, BigIntDef<N>, const N: usize);

/// A serde def type for [`Fp`]
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(remote = "Fp")]
pub struct FpDef<P: FpConfig<N>, const N: usize>(
    /// The backing bigint of the field element
    #[serde_as(as = "BigIntDef<N>")]
    pub BigInt<N>,
    /// Phantom marker for the field configuration
    pub PhantomData<P>,
);

impl_serde_as!(Fp<P, N>, FpDef<P, N>, P: FpConfig<N>, const N: usize);

/// A serde def type for the Bn254 scalar field
pub type ScalarFieldDef = FpDef<MontBackend<FrConfig, 4>, 4>;

/// A serde def type for the Bn254 G1 base field
pub(crate) type G1BaseFieldDef = FpDef<MontBackend<FqConfig, 4>, 4>;

/// A serde def type for the Bn254 G2 base field
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(remote = "QuadExtField<Fp2ConfigWrapper<Fq2Config>>")]
pub(crate) struct G2BaseFieldDef {
    /// The first coefficient of the extension field element
    #[serde_as(as = "G1BaseFieldDef")]
    pub c0: G1BaseField,
    /// The second coefficient of the extension field element
    #[serde_as(as = "G1BaseFieldDef")]
    pub c1: G1BaseField,
}

impl_serde_as!(G2BaseField, G2BaseFieldDef,);

/// A serde def type for Bn254 G1 points
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(remote = "Affine<G1Config>")]
pub(crate) struct G1AffineDef {
    /// The x coordinate of the point
    #[serde_as(as = "G1BaseFieldDef")]
    x: G1BaseField,
    /// The y coordinate of the point
    #[serde_as(as = "G1BaseFieldDef")]
    y: G1BaseField,
    /// Whether the point is the point at infinity
    infinity: bool,
}

impl_serde_as!(G1Affine, G1AffineDef,);

/// A serde def type for Bn254 G2 points
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(remote = "Affine<G2Config>")]
pub(crate) struct G2AffineDef {
    /// The x coordinate of the point
    #[serde_as(as = "G2BaseFieldDef")]
    x: G2BaseField,
    /// The y coordinate of the point
    #[serde_as(as = "G2BaseFieldDef")]
    y: G2BaseField,
    /// Whether the point is the point at infinity
    infinity: bool,
}

impl_serde_as!(G2Affine, G2AffineDef,);
