// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod seller_state;

pub use seller_state::SellerState;
