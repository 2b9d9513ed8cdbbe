//! Data transfer objects mirroring the API's JSON shapes.

/// Declares a DTO: every field becomes a [`Field`] with a camelCase JSON
/// name that is left out of the payload while absent.
macro_rules! dto {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "crate::types::Field::is_absent")]
                pub $field: crate::types::Field<$ty>,
            )*
        }
    };
}

/// Declares a string enum the API may extend. Values outside the listed
/// set decode into `Other` and are written back unchanged.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A value this client does not know about.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)*
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => $name::$variant,)*
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Ok($name::from(value.as_str()))
            }
        }
    };
}

mod field;
pub use self::field::Field;

mod page;
pub use self::page::{
    CategorySearchResult, CouponSearchResult, CustomerSearchResult, DeletedCoupon,
    DeletedCouponsResponse, DeletedCustomersResponse, DeletedEntity, DeletedOrdersResponse,
    DeletedProductsResponse, OrderSearchResult, Page, ProductSearchResult,
};

mod status;
pub use self::status::{
    CreateCouponStatus, CreateStatus, DeleteStatus, ErrorMessage, UpdateStatus, UploadStatus,
};

mod coupon;
pub use self::coupon::{CouponCatalogLimit, CouponStatus, DiscountCoupon, DiscountType, UsesLimit};

mod product;
pub use self::product::{
    Attribute, AttributeValue, Combination, Favorites, GalleryImage, OptionValue,
    PriceModifierType, Product, ProductClass, ProductEntry, ProductEntryCombination, ProductFile,
    ProductOption, ProductOptionChoice, RelatedCategory, RelatedProducts, WholesalePrice,
};

mod category;
pub use self::category::Category;

mod order;
pub use self::order::{
    CreditCardStatus, Discount, Order, OrderItem, OrderItemOptionFile, OrderItemProductFile,
    OrderItemProductOption, OrderItemTax, Person, ShippingOption,
};

mod customer;
pub use self::customer::{Customer, CustomerSearchEntry, ShippingAddress};

mod profile;
pub use self::profile::{
    AccountInfo, BusinessRegistrationId, Company, FormatsAndUnits, GeneralInfo, Languages,
    LatestStats, Profile, StarterSite, StoreSettings, Tax, TaxRule, Zone,
};

/// Numeric identifier of a store.
pub type StoreID = u64;
