pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover,
.btn-primary:focus {
  background-color: var(--primary-dark);
  border-color: var(--primary-dark);
  color: var(--text-primary);
}

.btn-secondary {
  background-color: var(--surface-raised);
  border-color: var(--surface-raised);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--amber-graphite);
  border-color: var(--amber-graphite);
}

.btn-outline-light {
  border: 1px solid var(--text-secondary);
  color: var(--text-primary);
  background: transparent;
}

.btn-outline-light:hover {
  background-color: var(--text-primary);
  color: var(--text-inverse);
}

.btn-outline-orange {
  border: 1px solid var(--primary);
  color: var(--primary);
  background: transparent;
}

.btn-outline-orange:hover {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-dark {
  background-color: var(--amber-midnight);
  border-color: var(--amber-midnight);
  color: var(--text-secondary);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: none;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
  height: 100%;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-md);
}

.card-link {
  display: block;
  color: inherit;
}

.card .poster {
  width: 100%;
  aspect-ratio: 2 / 3;
  object-fit: cover;
}

.card-body {
  padding: var(--space-3);
}

.card-title {
  margin: 0 0 var(--space-1) 0;
  font-size: 0.95rem;
  font-weight: 600;
  color: var(--text-primary);
}

/* single-line ellipsis; the title itself is never shortened */
.text-truncate {
  overflow: hidden;
  white-space: nowrap;
  text-overflow: ellipsis;
}

.card-meta {
  display: flex;
  justify-content: space-between;
  gap: var(--space-2);
  font-size: 0.8rem;
  color: var(--text-tertiary);
}

.card-meta .imdb-score::before {
  content: "\2605";
  margin-right: var(--space-1);
  color: var(--amber-gold);
}

.watchlist-card .card-body {
  border-top: 1px solid var(--border);
}

/* Progress */
.progress {
  height: 4px;
  margin-top: var(--space-2);
  background-color: var(--surface-raised);
  border-radius: var(--radius-full);
  overflow: hidden;
}

.progress-bar {
  height: 100%;
  border-radius: var(--radius-full);
  transition: width var(--transition-slow) var(--easing-standard);
}

/* Poster collage */
.poster-collage {
  display: grid;
  height: var(--collage-height);
  overflow: hidden;
  gap: 2px;
  background-color: var(--amber-midnight);
}

.poster-collage .collage-img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.collage-1 { grid-template-columns: 1fr; }
.collage-2 { grid-template-columns: repeat(2, 1fr); }
.collage-3 { grid-template-columns: repeat(3, 1fr); }
.collage-4 { grid-template-columns: repeat(4, 1fr); }

/* Lists */
.list-group {
  padding: 0;
  margin: 0;
  list-style: none;
}

.list-group-item {
  display: flex;
  align-items: baseline;
  gap: var(--space-3);
  padding: var(--space-2) 0;
  background: transparent;
  border: none;
  border-bottom: 1px solid var(--border);
  color: var(--text-secondary);
}

.list-group-item:last-child {
  border-bottom: none;
}

.list-group-item .meta-label {
  min-width: 120px;
  color: var(--text-tertiary);
  font-size: 0.85rem;
  text-transform: uppercase;
  letter-spacing: 0.04em;
}

.separated-list .separator {
  padding: 0 var(--space-1);
  color: var(--text-tertiary);
}

/* Ratings */
.rating-badge {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  padding: 2px var(--space-2);
  border-radius: var(--radius-sm);
  background-color: var(--surface-raised);
  font-weight: 600;
}

.rating-badge img {
  height: 16px;
}

.rating-badge.imdb .rating-value { color: var(--amber-gold); }
.rating-badge.rotten-tomatoes .rating-value { color: var(--amber-tomato); }

.age-rating {
  padding: 1px var(--space-2);
  border: 1px solid var(--text-secondary);
  border-radius: var(--radius-sm);
  font-size: 0.75rem;
  font-weight: 700;
}

/* Cast */
.cast-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  padding: 0;
  margin: var(--space-4) 0;
  list-style: none;
}

.cast-member {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.avatar {
  width: var(--avatar-size);
  height: var(--avatar-size);
  border-radius: var(--radius-full);
  object-fit: cover;
  border: 2px solid var(--surface-raised);
}

.avatar-sm {
  width: var(--avatar-size-sm);
  height: var(--avatar-size-sm);
}

.cast-text {
  display: flex;
  flex-direction: column;
  line-height: 1.2;
}

.cast-name {
  font-size: 0.8rem;
  font-weight: 600;
  text-transform: uppercase;
}

.cast-role {
  font-size: 0.75rem;
}

/* Sections and grids */
.card-section {
  padding: var(--space-8) var(--space-6);
}

.section-header {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.section-title {
  margin: 0;
  font-family: var(--font-display);
  font-size: 1.75rem;
  letter-spacing: 0.03em;
}

.section-count {
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  color: var(--text-primary);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  gap: var(--space-4);
}

.watchlist-grid {
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
}

.empty-grid {
  color: var(--text-tertiary);
  font-style: italic;
}
"#;
