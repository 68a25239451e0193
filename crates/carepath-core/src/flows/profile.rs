use carepath_model::{AuthState, Role, UserProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub profile: UserProfile,
    pub payment_badge: Option<&'static str>,
    pub visitor: bool,
}

/// Profile shown on the patient and family "me" tabs.
pub fn profile_view(auth: &AuthState) -> ProfileView {
    let profile = match auth.role() {
        Role::Family => carepath_fixtures::family_profile(),
        Role::Patient | Role::Doctor => carepath_fixtures::patient_profile(),
    };
    ProfileView {
        profile,
        payment_badge: auth.auth_method().and_then(|method| method.payment_badge()),
        visitor: auth.is_visitor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carepath_model::{AuthMethod, LoginRegion, Persona, Session};

    #[test]
    fn wechat_login_shows_badge() {
        let auth = AuthState::LoggedIn(Session::new(
            LoginRegion::Shanghai,
            AuthMethod::Wechat,
            Persona::Patient,
        ));
        let view = profile_view(&auth);
        assert_eq!(view.payment_badge, Some("微信支付已免密"));
        assert_eq!(view.profile.name, "陈桂芳");
    }

    #[test]
    fn family_sees_own_profile() {
        let auth = AuthState::LoggedIn(Session::new(
            LoginRegion::Shanghai,
            AuthMethod::Medicare,
            Persona::Family,
        ));
        let view = profile_view(&auth);
        assert_eq!(view.profile.name, "李敏");
        assert!(view.payment_badge.is_none());
    }
}
