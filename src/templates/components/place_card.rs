use crate::presenter::{format_percent, PlaceCardVm};
use maud::{html, Markup};

/// `prefix` is the block the card sits in, e.g. `cities` or `near-places`.
pub fn place_card(card: &PlaceCardVm, prefix: &str) -> Markup {
    let href = format!("/offer/{}", card.id);

    html! {
        article class=(format!("{prefix}__card place-card")) {
            @if card.is_premium {
                div class="place-card__mark" {
                    span { "Premium" }
                }
            }
            div class=(format!("{prefix}__image-wrapper place-card__image-wrapper")) {
                a href=(href) {
                    img class="place-card__image" src=(card.image) width="260" height="200" alt="Place image";
                }
            }
            div class="place-card__info" {
                div class="place-card__price-wrapper" {
                    div class="place-card__price" {
                        b class="place-card__price-value" { "€" (card.price) }
                        span class="place-card__price-text" { "/\u{a0}night" }
                    }
                }
                div class="place-card__rating rating" {
                    div class="place-card__stars rating__stars" {
                        span style=(format!("width: {}", format_percent(card.rating_width))) {}
                        span class="visually-hidden" { "Rating" }
                    }
                }
                h2 class="place-card__name" {
                    a href=(href) { (card.title) }
                }
                p class="place-card__type" { (card.kind_label) }
            }
        }
    }
}

pub fn near_places_list(cards: &[PlaceCardVm]) -> Markup {
    html! {
        div class="near-places__list places__list" {
            @for card in cards {
                (place_card(card, "near-places"))
            }
        }
    }
}
