use crate::presenter::{format_percent, ReviewVm};
use maud::{html, Markup};

const STARS: [(u8, &str); 5] = [
    (5, "perfect"),
    (4, "good"),
    (3, "not bad"),
    (2, "badly"),
    (1, "terribly"),
];

pub fn reviews_list(reviews: &[ReviewVm]) -> Markup {
    html! {
        ul class="reviews__list" {
            @for review in reviews {
                li class="reviews__item" {
                    div class="reviews__user user" {
                        div class="reviews__avatar-wrapper user__avatar-wrapper" {
                            img class="reviews__avatar user__avatar" src=(review.avatar) width="54" height="54" alt="Reviews avatar";
                        }
                        span class="reviews__user-name" { (review.name) }
                    }
                    div class="reviews__info" {
                        div class="reviews__rating rating" {
                            div class="reviews__stars rating__stars" {
                                span style=(format!("width: {}", format_percent(review.rating_width))) {}
                                span class="visually-hidden" { "Rating" }
                            }
                        }
                        p class="reviews__text" { (review.comment) }
                        time class="reviews__time" datetime=(review.datetime) { (review.date_label) }
                    }
                }
            }
        }
    }
}

/// Submission form. Posting is handled elsewhere.
pub fn review_form() -> Markup {
    html! {
        form class="reviews__form form" action="#" method="post" {
            label class="reviews__label form__label" for="review" { "Your review" }
            div class="reviews__rating-form form__rating" {
                @for (value, title) in STARS {
                    input class="form__rating-input visually-hidden" name="rating" value=(value) id=(format!("{value}-stars")) type="radio";
                    label class="reviews__rating-label form__rating-label" for=(format!("{value}-stars")) title=(title) {
                        svg class="form__star-image" width="37" height="33" {}
                    }
                }
            }
            textarea class="reviews__textarea form__textarea" id="review" name="review"
                placeholder="Tell how was your stay, what you like and what can be improved" {}
            div class="reviews__button-wrapper" {
                p class="reviews__help" {
                    "To submit review please make sure to set "
                    span class="reviews__star" { "rating" }
                    " and describe your stay with at least "
                    b class="reviews__text-amount" { "50 characters" }
                    "."
                }
                button class="reviews__submit form__submit button" type="submit" disabled { "Submit" }
            }
        }
    }
}
