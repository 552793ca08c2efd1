//! Interaction styles layered on top of the site stylesheet.

use stylist::{css, StyleSource};

pub fn interactions() -> StyleSource {
    css!(
        r#"
        .tech-tag {
            position: relative;
            overflow: hidden;
        }

        @keyframes ripple {
            to {
                transform: scale(4);
                opacity: 0;
            }
        }

        @keyframes field-error-in {
            from {
                opacity: 0;
                transform: translateY(-10px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }

        @keyframes form-message-in {
            from {
                opacity: 0;
                transform: translateX(-20px);
            }
            to {
                opacity: 1;
                transform: translateX(0);
            }
        }

        .section--visible {
            opacity: 1;
        }

        .hero__title,
        .hero__subtitle,
        .hero__actions {
            opacity: 0;
            transform: translateY(30px);
            transition: all 900ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .animate-element {
            opacity: 0;
            transform: translateY(30px);
            transition: all 600ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .animate-element.animate-in {
            opacity: 1;
            transform: translateY(0);
        }

        .process-step {
            opacity: 0;
            transform: translateX(-30px);
            transition: all 800ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .process-step.animate-in {
            opacity: 1;
            transform: translateX(0);
        }

        .tech-category {
            opacity: 0;
            transform: translateY(20px) scale(0.95);
            transition: all 600ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .tech-category.animate-in {
            opacity: 1;
            transform: translateY(0) scale(1);
        }

        .blog-card {
            opacity: 0;
            transform: translateY(20px);
            transition: all 700ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .blog-card.animate-in {
            opacity: 1;
            transform: translateY(0);
        }

        .industry-card {
            opacity: 0;
            transform: translateY(20px) rotate(-2deg);
            transition: all 650ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .industry-card.animate-in {
            opacity: 1;
            transform: translateY(0) rotate(0deg);
        }

        .faq-item {
            opacity: 0;
            transform: translateY(10px);
            transition: all 500ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .faq-item.animate-in {
            opacity: 1;
            transform: translateY(0);
        }

        .field-error {
            animation: field-error-in 300ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .form-message {
            animation: form-message-in 400ms cubic-bezier(0.16, 1, 0.3, 1);
            transition: all 400ms cubic-bezier(0.16, 1, 0.3, 1);
        }

        .form-message--leaving {
            opacity: 0;
            transform: translateX(-20px);
        }

        body.keyboard-nav *:focus {
            outline: 2px solid var(--halo-accent);
            outline-offset: 2px;
        }

        @media (max-width: 768px) {
            .nav {
                display: none;
            }

            .nav--open {
                display: flex;
            }

            .service-card:hover {
                transform: translateY(-4px);
            }

            .project-card:hover,
            .blog-card:hover,
            .industry-card:hover {
                transform: translateY(-3px);
            }
        }
        "#
    )
}
