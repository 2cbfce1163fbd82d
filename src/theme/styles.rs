//! Global CSS styles for Forge Preview.
//!
//! Dark forge aesthetic: near-black backdrop, ember accents, glassy cards.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* FORGE (Backgrounds) */
  --forge-black: #07080b;
  --forge-deep: #0e1117;
  --forge-ring: rgba(255, 255, 255, 0.1);

  /* EMBER (Accents) */
  --ember: #ff7a1a;
  --ember-glow: rgba(255, 122, 26, 0.35);

  /* PRICE */
  --emerald: #6ee7b7;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);
  --text-muted: rgba(255, 255, 255, 0.5);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-xxs: 0.625rem;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.25rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  /* Spring-like overshoot for the flip */
  --transition-flip: 650ms cubic-bezier(0.34, 1.36, 0.64, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: radial-gradient(ellipse at top, var(--forge-deep), var(--forge-black) 70%);
  color: var(--text-primary);
  min-height: 100svh;
  padding-bottom: env(safe-area-inset-bottom);
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

/* === Page === */
.forge {
  position: relative;
  margin: 0 auto;
  width: 100%;
  max-width: 1024px;
  padding: 1.5rem 0.75rem max(2rem, env(safe-area-inset-bottom));
}

.forge-header {
  margin-bottom: 1.5rem;
  text-align: center;
}

.page-title {
  font-weight: 600;
  letter-spacing: 0.05em;
  font-size: clamp(1.25rem, 2.5vw, 1.75rem);
}

.tagline {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.forge-footer {
  margin-top: 2.5rem;
  text-align: center;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.btn-back {
  display: inline-block;
  margin-top: 1.5rem;
  color: var(--ember);
  text-decoration: none;
}

@media (min-width: 640px) {
  .forge {
    padding: 2rem 1rem 2.5rem;
  }

  .forge-header {
    text-align: left;
  }

  .tagline {
    font-size: var(--text-base);
  }
}

/* === Carousel === */
.carousel {
  position: relative;
}

.carousel__viewport {
  overflow-x: auto;
  overscroll-behavior-x: contain;
  scroll-behavior: smooth;
  scrollbar-width: none;
  -webkit-overflow-scrolling: touch;
}

.carousel__viewport::-webkit-scrollbar {
  display: none;
}

.carousel__track {
  display: flex;
  touch-action: pan-x;
}

.carousel__slide {
  flex: 0 0 88%;
  padding: 0 0.5rem;
}

@media (min-width: 640px) { .carousel__slide { flex-basis: 66%; padding: 0 0.75rem; } }
@media (min-width: 768px) { .carousel__slide { flex-basis: 56%; } }
@media (min-width: 1024px) { .carousel__slide { flex-basis: 44%; } }

.carousel__controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  margin-top: 1.25rem;
}

.carousel__arrow {
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  border: 1px solid var(--forge-ring);
  background: rgba(255, 255, 255, 0.05);
  color: var(--text-primary);
  font-size: var(--text-xl);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.carousel__arrow:hover {
  background: rgba(255, 255, 255, 0.15);
}

.carousel__dots {
  display: flex;
  gap: 0.5rem;
}

.carousel__dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  border: none;
  background: var(--text-muted);
  cursor: pointer;
}

.carousel__dot--active {
  background: var(--ember);
  box-shadow: 0 0 8px var(--ember-glow);
}

/* === Flip Card === */
.flip-card {
  position: relative;
  height: 440px;
  perspective: 1200px;
  user-select: none;
  cursor: pointer;
  border-radius: 1rem;
  outline: none;
}

.flip-card:focus-visible {
  box-shadow: 0 0 0 2px var(--ember);
}

.flip-card__inner {
  position: relative;
  width: 100%;
  height: 100%;
  border-radius: 1rem;
  transform-style: preserve-3d;
  transition: transform var(--transition-flip);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
}

.flip-card__inner--flipped {
  transform: rotateY(180deg);
}

.flip-card__face {
  position: absolute;
  inset: 0;
  overflow: hidden;
  border-radius: 1rem;
  border: 1px solid var(--forge-ring);
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
}

.flip-card__face--back {
  transform: rotateY(180deg);
}

.flip-card__img {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.flip-card__shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.1) 50%, transparent);
}

.flip-card__shade--deep {
  background: linear-gradient(to top, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.2) 50%, transparent);
}

.flip-card__caption,
.flip-card__actions {
  position: absolute;
  left: 1rem;
  bottom: 1rem;
}

.flip-card__tier {
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: var(--text-secondary);
}

.flip-card__title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.flip-card__price {
  color: var(--emerald);
  font-weight: 500;
}

.flip-card__tags {
  display: flex;
  gap: 0.5rem;
  padding-top: 0.5rem;
}

.flip-card__tag {
  font-size: var(--text-xxs);
  padding: 0.25rem 0.5rem;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.1);
}

.flip-card__actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.flip-card__link {
  border-radius: 0.5rem;
  padding: 0.5rem 0.75rem;
  font-size: var(--text-sm);
  color: var(--text-primary);
  text-decoration: none;
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(8px);
  transition: background var(--transition-fast);
}

.flip-card__link:hover {
  background: rgba(255, 255, 255, 0.2);
}

.flip-card__hint {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.flip-card__ring {
  pointer-events: none;
  position: absolute;
  inset: -1px;
  border-radius: 1rem;
  box-shadow: inset 0 0 0 1px var(--forge-ring), 0 0 40px -10px rgba(255, 255, 255, 0.25);
}

@media (prefers-reduced-motion: reduce) {
  .flip-card__inner {
    transition: none;
  }
  .carousel__viewport {
    scroll-behavior: auto;
  }
}
"#;
