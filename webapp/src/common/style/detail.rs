pub const DETAIL_STYLES: &str = r#"
/* Detail Pages (watchlist, movie) */
.detail-hero {
  position: relative;
  padding: var(--space-12) var(--space-6);
  background-size: cover;
  background-position: center top;
}

/* darkens the full-bleed poster so the text stays readable */
.hero-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, var(--overlay-strong) 0%, var(--overlay) 60%, var(--overlay-strong) 100%);
}

.detail-content {
  position: relative;
  z-index: 1;
  display: grid;
  grid-template-columns: 300px 1fr;
  gap: var(--space-10);
  max-width: var(--container-width);
  margin: 0 auto;
}

.detail-sidebar .poster-collage {
  height: 420px;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-poster);
}

.detail-sidebar .poster-main {
  width: 100%;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-poster);
}

.sidebar-actions {
  display: grid;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.detail-main {
  min-width: 0;
}

.title-block .detail-type {
  font-size: 0.85rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.title-block .detail-title {
  font-family: var(--font-display);
  font-size: 3rem;
  line-height: 1.05;
  margin: var(--space-1) 0;
}

.title-meta,
.ratings-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: var(--space-4);
  margin: var(--space-3) 0;
  color: var(--text-secondary);
}

.ratings-row .rank {
  font-family: var(--font-display);
  font-size: 1.5rem;
  color: var(--primary);
}

.detail-meta {
  margin-top: var(--space-6);
  max-width: 760px;
}

.detail-description {
  margin-top: var(--space-4);
  color: var(--text-secondary);
  line-height: 1.7;
}

.list-group-item .meta-value {
  text-align: right;
}

.album-size {
  max-width: var(--container-width);
  margin: calc(-1 * var(--space-4)) auto var(--space-8);
  font-size: 0.875rem;
}

/* Library page */
.library-summary {
  display: flex;
  gap: var(--space-6);
  padding: var(--space-8) var(--space-6) 0;
}

.summary-stat {
  display: flex;
  flex-direction: column;
  padding: var(--space-4) var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
}

.summary-stat .stat-value {
  font-family: var(--font-display);
  font-size: 2.25rem;
  color: var(--primary);
}

.summary-stat .stat-label {
  font-size: 0.8rem;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

.director-list .director-position {
  width: 2rem;
  color: var(--text-tertiary);
}

.director-list .director-name {
  flex: 1;
  color: var(--text-primary);
}

.director-list .director-score {
  padding: 1px var(--space-2);
  border-radius: var(--radius-full);
  color: var(--text-inverse);
  font-weight: 700;
}

.not-found {
  padding: var(--space-16) var(--space-6);
  text-align: center;
}

/* Breakpoints */
@media (max-width: 1200px) {
  .footer-grid {
    grid-template-columns: repeat(3, 1fr);
  }

  .newsletter {
    grid-column: 1 / -1;
  }
}

@media (max-width: 992px) {
  .slide-content,
  .detail-content {
    grid-template-columns: 1fr;
    flex-direction: column-reverse;
  }

  .slide-title,
  .title-block .detail-title {
    font-size: 2.5rem;
  }

  .poster-stack {
    width: 220px;
    height: 330px;
  }

  .search-form {
    display: none;
  }
}

@media (max-width: 576px) {
  .nav-primary {
    display: none;
  }

  .card-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .watchlist-grid,
  .footer-grid {
    grid-template-columns: 1fr;
  }

  .library-summary {
    flex-direction: column;
  }

  .footer-bottom {
    flex-direction: column;
    gap: var(--space-3);
  }
}
"#;
