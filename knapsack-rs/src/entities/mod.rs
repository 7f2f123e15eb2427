mod instance;
mod item;
mod profit;

#[doc(inline)]
pub use instance::KPInstance;

#[doc(inline)]
pub use instance::estimated_footprint;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use profit::Profit;
