pub const HOME_STYLES: &str = r#"
/* Home Page Styles */

/* Carousel */
.hero-carousel {
  position: relative;
  background: radial-gradient(circle at 75% 40%, var(--surface-raised) 0%, var(--background) 65%);
}

.hero-carousel .carousel-item {
  padding: var(--space-12) var(--space-6);
  min-height: 560px;
}

.slide-content {
  display: flex;
  align-items: center;
  gap: var(--space-8);
  max-width: var(--container-width);
  margin: 0 auto;
}

.slide-info {
  flex: 1 1 50%;
}

.slide-title {
  font-family: var(--font-display);
  font-size: 3.5rem;
  line-height: 1;
  letter-spacing: 0.02em;
  margin-bottom: var(--space-3);
}

.slide-meta,
.slide-directors,
.slide-ratings {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-3);
  color: var(--text-secondary);
}

.slide-description {
  max-width: 560px;
  color: var(--text-secondary);
}

.read-more {
  margin-left: var(--space-1);
  font-weight: 600;
}

.slide-actions {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-6);
}

/* Poster stack: one main poster with the others layered behind it */
.slide-posters {
  flex: 1 1 50%;
  display: flex;
  justify-content: center;
}

.poster-stack {
  position: relative;
  width: 300px;
  height: 450px;
}

.poster-stack .poster {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-poster);
}

.poster-stack .poster-main {
  z-index: 3;
}

.poster-stack .poster-depth-0 {
  z-index: 2;
  transform: translateX(22%) scale(0.9);
  opacity: 0.7;
}

.poster-stack .poster-depth-1 {
  z-index: 1;
  transform: translateX(40%) scale(0.8);
  opacity: 0.45;
}

.poster-stack .poster-depth-2,
.poster-stack .poster-depth-3 {
  z-index: 0;
  transform: translateX(55%) scale(0.7);
  opacity: 0.25;
}

.hero-carousel .carousel-indicators {
  bottom: var(--space-4);
}

.hero-carousel .carousel-indicators [data-bs-target] {
  width: 28px;
  height: 4px;
  border-radius: var(--radius-full);
  background-color: var(--text-tertiary);
}

.hero-carousel .carousel-indicators .active {
  background-color: var(--primary);
}
"#;
