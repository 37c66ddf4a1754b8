pub const LAYOUT_STYLES: &str = r#"
/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 20;
  height: var(--header-height);
  box-shadow: var(--shadow-md);
}

.site-nav {
  display: flex;
  align-items: center;
  gap: var(--space-6);
  height: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.navbar-brand .logo {
  height: 36px;
}

.nav-primary {
  display: flex;
  gap: var(--space-2);
  margin: 0;
  padding: 0;
  list-style: none;
}

.nav-link {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-raised);
}

.nav-link.active {
  color: var(--primary);
}

.search-form {
  flex: 1;
  max-width: 420px;
  margin-left: auto;
}

.search-input {
  width: 100%;
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-primary);
}

.search-input::placeholder {
  color: var(--text-tertiary);
}

.search-input:focus {
  border-color: var(--border-focus);
  outline: none;
}

.user-menu .dropdown-toggle {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-secondary);
}

.user-menu .dropdown-menu {
  min-width: 200px;
  border: 1px solid var(--border);
  box-shadow: var(--shadow-lg);
}

.user-menu .dropdown-item {
  color: var(--text-secondary);
}

.user-menu .dropdown-item:hover {
  background-color: var(--surface-raised);
  color: var(--text-primary);
}

/* Content */
.page-content {
  min-height: calc(100vh - var(--header-height));
}

.placeholder-page {
  padding: var(--space-16) var(--space-6);
  text-align: center;
}

.placeholder-page .lead {
  color: var(--text-tertiary);
}

/* Footer */
.site-footer {
  padding: var(--space-12) var(--space-6) var(--space-6);
  border-top: 1px solid var(--border);
  color: var(--text-secondary);
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr) 2fr;
  gap: var(--space-8);
  max-width: var(--container-width);
  margin: 0 auto;
}

.footer-column h6 {
  margin-bottom: var(--space-3);
  color: var(--text-primary);
  text-transform: uppercase;
  letter-spacing: 0.06em;
}

.footer-column ul {
  padding: 0;
  list-style: none;
}

.footer-column a {
  display: inline-block;
  padding: var(--space-1) 0;
  color: var(--text-secondary);
}

.footer-column a:hover {
  color: var(--primary);
}

.newsletter-form {
  display: flex;
  gap: var(--space-2);
  margin-top: var(--space-3);
}

.newsletter-form .form-control {
  flex: 1;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface-raised);
  color: var(--text-primary);
}

.footer-bottom {
  display: flex;
  justify-content: space-between;
  align-items: center;
  max-width: var(--container-width);
  margin: var(--space-8) auto 0;
  padding-top: var(--space-4);
  border-top: 1px solid var(--border);
  font-size: 0.85rem;
}

.social-links {
  display: flex;
  gap: var(--space-3);
  font-size: 1.25rem;
}

.social-links a {
  color: var(--text-secondary);
}

.social-links a:hover {
  color: var(--primary);
}
"#;
