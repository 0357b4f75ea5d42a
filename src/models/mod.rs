pub mod card;
pub mod column;
pub mod comment;
pub mod user;

pub use card::{Card, CardWithComments, CreateCardInput, UpdateCardInput};
pub use column::{Column, CreateColumnInput, UpdateColumnInput};
pub use comment::{Comment, CreateCommentInput, UpdateCommentInput};
pub use user::{CreateUserInput, UpdateUserInput, User, UserCredentials, UserWithColumns};
