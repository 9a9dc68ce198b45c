// templates/pages/index.rs

use crate::domain::Catalog;
use crate::presenter::PlaceCardVm;
use crate::templates::{components::place_card, page_layout};
use maud::{html, Markup};

/// Listing index; every card links to its offer page.
pub fn main_page(catalog: &Catalog, is_authorized: bool) -> Markup {
    let cards: Vec<PlaceCardVm> = catalog.offers().iter().map(PlaceCardVm::from_offer).collect();

    page_layout(
        "6 cities",
        is_authorized,
        "page--gray page--main",
        html! {
            main class="page__main page__main--index" {
                h1 class="visually-hidden" { "Cities" }
                div class="cities" {
                    div class="cities__places-container container" {
                        section class="cities__places places" {
                            h2 class="visually-hidden" { "Places" }
                            b class="places__found" { (cards.len()) " places to stay" }
                            div class="cities__places-list places__list tabs__content" {
                                @for card in &cards {
                                    (place_card(card, "cities"))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
