pub mod anchors;
pub mod pointer;
pub mod scroll;
