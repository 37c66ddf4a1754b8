// non-color design tokens; the color custom properties are generated from
// theme::ColorToken and prepended at startup
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Surfaces */
  --background: var(--amber-dark-blue);
  --surface: var(--amber-navy);
  --surface-raised: var(--amber-slate);
  --overlay: rgba(7, 11, 20, 0.72);
  --overlay-strong: rgba(7, 11, 20, 0.9);

  /* Text Colors */
  --text-primary: var(--amber-snow);
  --text-secondary: var(--amber-silver);
  --text-tertiary: var(--amber-graphite);
  --text-inverse: var(--amber-midnight);

  /* Accents */
  --primary: var(--amber-orange);
  --primary-light: var(--amber-amber);
  --primary-dark: #D9661A;
  --border: rgba(201, 209, 222, 0.12);
  --border-focus: var(--amber-orange);

  /* Layout */
  --header-height: 72px;
  --container-width: 1440px;
  --card-poster-ratio: 150%;
  --collage-height: 180px;
  --avatar-size: 48px;
  --avatar-size-sm: 32px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 10px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.3);
  --shadow-md: 0 4px 10px -1px rgba(0, 0, 0, 0.45);
  --shadow-lg: 0 16px 32px -8px rgba(0, 0, 0, 0.6);
  --shadow-poster: 0 18px 40px rgba(0, 0, 0, 0.65);

  /* Typography */
  --font-body: 'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-display: 'Bebas Neue', 'Inter', sans-serif;

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 400ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
