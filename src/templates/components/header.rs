use maud::{html, Markup};

/// Site header. Signed-in visitors get the profile nav, everyone else a sign-in link.
pub fn header(is_authorized: bool) -> Markup {
    html! {
        header class="header" {
            div class="container" {
                div class="header__wrapper" {
                    div class="header__left" {
                        a class="header__logo-link" href="/" {
                            img class="header__logo" src="/img/logo.svg" alt="6 cities logo" width="81" height="41";
                        }
                    }
                    @if is_authorized {
                        (user_nav())
                    } @else {
                        (guest_nav())
                    }
                }
            }
        }
    }
}

fn user_nav() -> Markup {
    html! {
        nav class="header__nav" {
            ul class="header__nav-list" {
                li class="header__nav-item user" {
                    div class="header__nav-profile" {
                        div class="header__avatar-wrapper user__avatar-wrapper" {}
                        span class="header__user-name user__name" { "Oliver.conner@gmail.com" }
                    }
                }
                li class="header__nav-item" {
                    a class="header__nav-link" href="/login" title="/login" {
                        span class="header__signout" { "Sign out" }
                    }
                }
            }
        }
    }
}

fn guest_nav() -> Markup {
    html! {
        nav class="header__nav" {
            ul class="header__nav-list" {
                li class="header__nav-item user" {
                    a class="header__nav-link header__nav-link--profile" href="/login" {
                        div class="header__avatar-wrapper user__avatar-wrapper" {}
                        span class="header__login" { "Sign in" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_in_header_offers_sign_out() {
        let html = header(true).into_string();

        assert!(html.contains("Sign out"));
        assert!(!html.contains("Sign in"));
    }

    #[test]
    fn guest_header_offers_sign_in() {
        let html = header(false).into_string();

        assert!(html.contains("Sign in"));
        assert!(!html.contains("header__signout"));
    }
}
