use crate::controller::Exhaust;
use application::transfer::UserDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub display_name: String,
    pub role_label: String,
}

pub struct UserPresenter;

impl Exhaust<UserDto> for UserPresenter {
    type To = UserView;
    fn emit(&self, input: UserDto) -> Self::To {
        UserView {
            display_name: input.display_name,
            role_label: input.role_label,
        }
    }
}

impl Exhaust<Option<UserDto>> for UserPresenter {
    type To = Option<UserView>;
    fn emit(&self, input: Option<UserDto>) -> Self::To {
        input.map(|user| Exhaust::<UserDto>::emit(self, user))
    }
}
