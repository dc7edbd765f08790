mod created;
mod signup;

pub(crate) use created::UserCreatedPage;
pub(crate) use signup::CreateUserPage;
