pub mod centor;
pub mod dass21;
pub mod phq9;
pub mod stop_bang;
