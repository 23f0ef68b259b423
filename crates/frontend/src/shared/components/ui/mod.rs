pub mod button;
pub mod checkbox;
pub mod input;
pub mod password_input;
pub mod select;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use password_input::PasswordInput;
pub use select::Select;
