// templates/pages/offer.rs

use crate::presenter::{format_percent, OfferVm};
use crate::templates::{
    components::{map_region, near_places_list, review_form, reviews_list},
    page_layout,
};
use maud::{html, Markup};

/// Offer detail page. Pure: identical inputs produce identical markup.
pub fn offer_page(vm: &OfferVm, is_authorized: bool) -> Markup {
    page_layout(
        &vm.page_title,
        is_authorized,
        "",
        html! {
            main class="page__main page__main--property" {
                section class="property" {
                    (gallery(vm))
                    div class="property__container container" {
                        div class="property__wrapper" {
                            (summary(vm))
                            (host(vm))
                            (reviews(vm, is_authorized))
                        }
                    }
                    section class="property__map map" {
                        (map_region(&vm.map))
                    }
                }
                div class="container" {
                    section class="near-places places" {
                        h2 class="near-places__title" { "Other places in the neighbourhood" }
                        (near_places_list(&vm.nearby))
                    }
                }
            }
        },
    )
}

fn gallery(vm: &OfferVm) -> Markup {
    html! {
        div class="property__gallery-container container" {
            div class="property__gallery" {
                // Positional keys; the photo list never changes while the page is shown.
                @for (index, photo) in vm.photos.iter().enumerate() {
                    div class="property__image-wrapper" data-key=(index) {
                        img class="property__image" src=(photo.src) alt=(photo.alt);
                    }
                }
            }
        }
    }
}

fn summary(vm: &OfferVm) -> Markup {
    html! {
        @if vm.is_premium {
            div class="property__mark" {
                span { "Premium" }
            }
        }
        div class="property__name-wrapper" {
            h1 class="property__name" { (vm.name) }
        }
        div class="property__rating rating" {
            div class="property__stars rating__stars" {
                span style=(format!("width: {}", format_percent(vm.rating_width))) {}
                span class="visually-hidden" { "Rating" }
            }
            span class="property__rating-value rating__value" { (vm.rating_label) }
        }
        ul class="property__features" {
            li class="property__feature property__feature--entire" { (vm.kind_label) }
            li class="property__feature property__feature--bedrooms" { (vm.bedrooms) " Bedrooms" }
            li class="property__feature property__feature--adults" { "Max " (vm.guests) " adults" }
        }
        div class="property__price" {
            b class="property__price-value" { "€" (vm.price) }
            span class="property__price-text" { "\u{a0}night" }
        }
        div class="property__inside" {
            h2 class="property__inside-title" { "What's inside" }
            ul class="property__inside-list" {
                @for (index, amenity) in vm.amenities.iter().enumerate() {
                    li class="property__inside-item" data-key=(index) { (amenity) }
                }
            }
        }
    }
}

fn host(vm: &OfferVm) -> Markup {
    html! {
        div class="property__host" {
            h2 class="property__host-title" { "Meet the host" }
            div class="property__host-user user" {
                div class="property__avatar-wrapper property__avatar-wrapper--pro user__avatar-wrapper" {
                    img class="property__avatar user__avatar" src=(vm.host.avatar) width="74" height="74" alt="Host avatar";
                }
                span class="property__user-name" { (vm.host.name) }
                @if vm.host.is_pro {
                    span class="property__user-status" { "Pro" }
                }
            }
            div class="property__description" {
                @for paragraph in &vm.description_paragraphs {
                    p class="property__text" { (paragraph) }
                }
            }
        }
    }
}

fn reviews(vm: &OfferVm, is_authorized: bool) -> Markup {
    html! {
        section class="property__reviews reviews" {
            h2 class="reviews__title" {
                "Reviews · "
                span class="reviews__amount" { (vm.review_count) }
            }
            (reviews_list(&vm.reviews))
            @if is_authorized {
                (review_form())
            }
        }
    }
}
