pub mod design;
pub mod iir;
pub mod pre_emphasis;
