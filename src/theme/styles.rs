//! Global CSS styles for PokeHolo.
//!
//! Dark gallery canvas; the cards bring their own color.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Canvas */
  --canvas: #0a0a0a;
  --canvas-raised: #171717;
  --canvas-border: rgba(255, 255, 255, 0.1);

  /* Brand gradient */
  --brand-from: #facc15;
  --brand-to: #ef4444;

  /* Accents */
  --accent: #2563eb;
  --accent-hover: #3b82f6;
  --danger: #f87171;
  --hp: #f87171;

  /* Rarity */
  --rarity-common: #a3a3a3;
  --rarity-rare: #93c5fd;
  --rarity-holofoil: #d8b4fe;
  --rarity-ultra: #facc15;

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: #d4d4d4;
  --text-muted: #a3a3a3;
  --text-faint: #525252;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
  --font-serif: Georgia, 'Times New Roman', serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 100ms ease-out;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
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
}

body {
  font-family: var(--font-sans);
  background: var(--canvas);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
}

img {
  display: block;
}

/* === Typography === */
.page-title {
  font-size: 2.25rem;
  font-weight: 700;
  letter-spacing: -0.025em;
  margin-bottom: 1rem;
}

.page-subtitle {
  color: var(--text-muted);
}

/* === Buttons === */
.btn-primary,
.btn-light,
.btn-glass,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: none;
  border-radius: 0.75rem;
  font-family: inherit;
  font-weight: 700;
  cursor: pointer;
  transition: transform var(--transition-normal), background var(--transition-normal);
}

.btn-primary {
  width: 100%;
  padding: 0.75rem 1rem;
  background: var(--accent);
  color: var(--text-primary);
  border-radius: 0.5rem;
}

.btn-primary:hover:not(:disabled) {
  background: var(--accent-hover);
  transform: scale(1.02);
}

.btn-primary:active:not(:disabled) {
  transform: scale(0.98);
}

.btn-primary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-light {
  flex: 1;
  padding: 1rem;
  background: #ffffff;
  color: #000000;
}

.btn-light:hover {
  background: #e5e5e5;
}

.btn-glass {
  padding: 1rem 1.5rem;
  background: rgba(255, 255, 255, 0.1);
  color: var(--text-primary);
  border: 1px solid var(--canvas-border);
}

.btn-glass:hover {
  background: rgba(255, 255, 255, 0.2);
}

.btn-ghost {
  background: transparent;
  color: var(--text-muted);
}

.btn-ghost:hover {
  color: var(--text-primary);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: transparent;
  color: var(--text-muted);
  cursor: pointer;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.icon-btn:hover {
  background: rgba(255, 255, 255, 0.1);
  color: var(--text-primary);
}

.close-btn {
  width: 2.5rem;
  height: 2.5rem;
  font-size: 1.5rem;
  background: rgba(0, 0, 0, 0.5);
  color: var(--text-primary);
}

.close-btn:hover {
  background: #ffffff;
  color: #000000;
}

.heart {
  color: #ef4444;
  opacity: 0.6;
}

.heart--filled {
  opacity: 1;
}

/* === Form === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.input-label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  background: rgba(38, 38, 38, 0.5);
  border: 1px solid #404040;
  border-radius: 0.5rem;
  color: var(--text-primary);
  font-family: inherit;
  font-size: 1rem;
  transition: box-shadow var(--transition-normal);
}

.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--accent);
}

.password-wrapper {
  position: relative;
}

.password-toggle {
  position: absolute;
  right: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: 1.25rem;
  cursor: pointer;
}

.password-toggle:hover {
  color: var(--text-primary);
}

/* === Type badges === */
.type-badges {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 0.25rem;
}

.type-badge {
  padding: 0.125rem 0.5rem;
  font-size: 10px;
  font-weight: 700;
  text-transform: uppercase;
  background: #262626;
  color: #ffffff;
  border-radius: 9999px;
}

/* === Ambient backdrop === */
.ambient-backdrop {
  position: absolute;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
}

.ambient-orb {
  position: absolute;
  width: 500px;
  height: 500px;
  border-radius: 9999px;
  filter: blur(100px);
}

.ambient-orb--top-left {
  top: -20%;
  left: -10%;
}

.ambient-orb--bottom-right {
  bottom: -20%;
  right: -10%;
}

/* === Loading === */
.loading-state {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

.loading-message {
  color: var(--text-muted);
}

.loading-indicator {
  display: flex;
  justify-content: center;
  padding: 3rem 0;
}

.loading-chevron {
  font-size: 2rem;
  color: #737373;
  animation: bounce 1s infinite;
}

.spinner {
  width: 1.25rem;
  height: 1.25rem;
  border: 2px solid rgba(255, 255, 255, 0.3);
  border-top-color: #ffffff;
  border-radius: 9999px;
  animation: spin 0.8s linear infinite;
}

@keyframes bounce {
  0%, 100% { transform: translateY(-25%); }
  50% { transform: translateY(0); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes pulse {
  50% { opacity: 0.5; }
}

/* === Login === */
.login-page {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: #000000;
}

.login-panel {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 28rem;
  padding: 2rem;
  background: rgba(23, 23, 23, 0.5);
  backdrop-filter: blur(24px);
  border: 1px solid var(--canvas-border);
  border-radius: 1rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.login-header {
  text-align: center;
  margin-bottom: 2rem;
}

.login-mark,
.brand-mark {
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--brand-from), var(--brand-to));
  color: #000000;
  font-weight: 900;
  font-style: italic;
}

.login-mark {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  border-radius: 1rem;
  font-size: 2.25rem;
  transform: rotate(3deg);
}

.login-title {
  font-size: 1.875rem;
  font-weight: 700;
  letter-spacing: -0.025em;
}

.login-subtitle {
  margin-top: 0.5rem;
  color: var(--text-muted);
}

.login-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.login-error {
  padding: 0.75rem;
  background: rgba(239, 68, 68, 0.1);
  border: 1px solid rgba(239, 68, 68, 0.2);
  border-radius: 0.5rem;
  color: var(--danger);
  font-size: 0.875rem;
}

.login-footnote {
  margin-top: 1.5rem;
  text-align: center;
  font-size: 0.75rem;
  color: var(--text-faint);
}

/* === Shell === */
.shell {
  height: 100vh;
  display: flex;
  flex-direction: column;
  background: var(--canvas);
}

.shell-main {
  position: relative;
  flex: 1;
  min-height: 0;
}

.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  height: 4rem;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--canvas-border);
}

.nav-header-inner {
  max-width: 80rem;
  height: 100%;
  margin: 0 auto;
  padding: 0 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  text-decoration: none;
}

.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: 0.25rem;
}

.brand-title {
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: -0.05em;
  background: linear-gradient(90deg, var(--brand-from), var(--brand-to));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-user {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.nav-greeting {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.nav-username {
  color: var(--text-primary);
}

/* === Home / collection list === */
.home {
  height: 100%;
  overflow-y: auto;
  padding-bottom: 5rem;
}

.home-inner {
  max-width: 48rem;
  margin: 0 auto;
  padding: 3rem 1rem 0;
}

.home-header {
  text-align: center;
  margin-bottom: 3rem;
}

.set-list {
  display: flex;
  flex-direction: column;
  gap: 6rem;
}

.set-stack {
  position: relative;
  display: flex;
  align-items: center;
  cursor: pointer;
  transition: transform var(--transition-slow);
}

.set-stack:hover {
  transform: scale(1.05);
}

.set-stack--left {
  justify-content: flex-start;
}

.set-stack--right {
  justify-content: flex-end;
}

.set-stack__pile {
  position: relative;
  width: 18rem;
  height: 24rem;
}

.set-stack__back {
  position: absolute;
  inset: 0;
  background: #262626;
  border: 1px solid #404040;
  border-radius: 1rem;
}

.set-stack__back--far {
  transform: translate(1rem, 1rem) rotate(6deg);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.set-stack__back--near {
  transform: translate(-0.5rem, 0.5rem) rotate(-3deg);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
}

.set-stack__cover {
  position: absolute;
  inset: 0;
  z-index: 2;
  overflow: hidden;
  background: #171717;
  border: 2px solid #525252;
  border-radius: 1rem;
  box-shadow: 0 0 30px rgba(0, 0, 0, 0.5);
  transition: transform var(--transition-normal);
}

.set-stack:hover .set-stack__cover {
  transform: translateY(-1rem);
}

.set-stack__cover img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.8;
  transition: opacity var(--transition-slow);
}

.set-stack:hover .set-stack__cover img {
  opacity: 1;
}

.set-stack__caption {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1.5rem;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.9), transparent 60%);
}

.set-stack__name {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 0.25rem;
}

.set-stack__meta {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.set-stack__shine {
  position: absolute;
  inset: 0;
  background: linear-gradient(45deg, transparent, rgba(255, 255, 255, 0.1), transparent);
  transform: translateX(-100%);
  transition: transform 1s ease-in-out;
}

.set-stack:hover .set-stack__shine {
  transform: translateX(100%);
}

.set-stack__blurb {
  position: absolute;
  width: 16rem;
}

.set-stack--left .set-stack__blurb {
  left: 20rem;
  text-align: left;
}

.set-stack--right .set-stack__blurb {
  right: 20rem;
  text-align: right;
}

.set-stack__release {
  display: block;
  margin-bottom: 0.5rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: #3b82f6;
}

.set-stack__blurb p {
  font-size: 0.875rem;
  line-height: 1.6;
  color: var(--text-muted);
}

.set-stack__rule {
  width: 3rem;
  height: 2px;
  margin-top: 1rem;
  background: #404040;
}

.set-stack--right .set-stack__rule {
  margin-left: auto;
}

@media (max-width: 768px) {
  .set-stack__blurb {
    display: none;
  }
}

/* === Set view === */
.set-view {
  height: 100%;
  overflow-y: auto;
  padding-bottom: 5rem;
}

.set-hero {
  position: relative;
  height: 16rem;
  overflow: hidden;
  background: #171717;
  border-bottom: 1px solid #262626;
}

.set-hero__bg {
  position: absolute;
  inset: 0;
}

.set-hero__bg img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.3;
  filter: blur(4px);
}

.set-hero__fade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, rgba(0, 0, 0, 0.5), var(--canvas));
}

.set-hero__content {
  position: relative;
  max-width: 80rem;
  height: 100%;
  margin: 0 auto;
  padding: 0 1rem 2rem;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
}

.back-link {
  position: absolute;
  top: 1.5rem;
  left: 2rem;
  background: none;
  border: none;
  color: var(--text-muted);
  font-family: inherit;
  font-size: 1rem;
  cursor: pointer;
}

.back-link:hover {
  color: var(--text-primary);
}

.set-hero__title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.set-hero__meta {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-muted);
}

.set-hero__series {
  padding: 0.25rem 0.5rem;
  background: #262626;
  border: 1px solid #404040;
  border-radius: 0.25rem;
}

.card-grid {
  max-width: 80rem;
  margin: 0 auto;
  padding: 3rem 2rem;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr));
  gap: 2rem;
}

.card-grid__cell {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.card-grid__lift {
  transition: transform var(--transition-normal);
}

.card-grid__lift:hover {
  position: relative;
  z-index: 10;
  transform: scale(1.05);
}

.card-grid__label {
  text-align: center;
  opacity: 0.5;
  transition: opacity var(--transition-normal);
}

.card-grid__cell:hover .card-grid__label {
  opacity: 1;
}

.card-grid__name {
  font-size: 0.75rem;
  font-weight: 700;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-grid__id {
  font-size: 10px;
  color: var(--text-muted);
}

/* === Holo card === */
.holo-card {
  position: relative;
  width: 100%;
  aspect-ratio: 2.5 / 3.5;
  perspective: 1000px;
  cursor: pointer;
}

.holo-card--active {
  max-width: 28rem;
}

.holo-card__body {
  position: relative;
  width: 100%;
  height: 100%;
  overflow: hidden;
  border-radius: 1rem;
  transform-style: preserve-3d;
  transition: transform var(--transition-fast);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.holo-card__base {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  padding: 0.75rem;
  border-radius: 1rem;
}

.holo-card__header {
  position: relative;
  z-index: 1;
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.25rem;
  padding: 0.25rem 0.75rem;
  background: rgba(23, 23, 23, 0.8);
  backdrop-filter: blur(4px);
  border-radius: 0.5rem 0.5rem 0 0;
}

.holo-card__name {
  font-size: 0.875rem;
  font-weight: 700;
  letter-spacing: 0.025em;
}

.holo-card__hp {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--hp);
}

.holo-card__art {
  position: relative;
  z-index: 1;
  flex: 1;
  min-height: 0;
  margin-bottom: 0.5rem;
  overflow: hidden;
  background: #171717;
  border: 4px solid rgba(234, 179, 8, 0.3);
  border-radius: 0.5rem;
  box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.5);
}

.holo-card__art img {
  width: 100%;
  height: 100%;
  object-fit: contain;
  padding: 0.5rem;
  transition: transform var(--transition-slow);
}

.holo-card__art img:hover {
  transform: scale(1.1);
}

.holo-card__details {
  position: relative;
  z-index: 1;
  min-height: 20%;
  padding: 0.5rem;
  background: rgba(245, 245, 245, 0.9);
  border-radius: 0.5rem;
}

.holo-card__description {
  font-family: var(--font-serif);
  font-size: 10px;
  line-height: 1.25;
  color: #262626;
}

.holo-card__footer {
  position: relative;
  z-index: 1;
  margin-top: auto;
  padding: 0.25rem 0.25rem 0;
  display: flex;
  justify-content: space-between;
  align-items: center;
  font-size: 9px;
}

.holo-card__id {
  color: rgba(255, 255, 255, 0.7);
}

.holo-card__rarity {
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.rarity--common { color: var(--rarity-common); }
.rarity--rare { color: var(--rarity-rare); }
.rarity--holofoil { color: var(--rarity-holofoil); }
.rarity--ultra-rare { color: var(--rarity-ultra); }

.holo-card__texture {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  background-image: repeating-linear-gradient(
    45deg,
    rgba(0, 0, 0, 0.25) 0 2px,
    transparent 2px 4px
  );
  mix-blend-mode: overlay;
  pointer-events: none;
}

/* Rainbow sheen, positioned against the pointer */
.card-holo {
  position: absolute;
  inset: 0;
  z-index: 2;
  border-radius: 1rem;
  pointer-events: none;
  background-image:
    repeating-linear-gradient(
      110deg,
      #ff7773 0%, #ffed5f 10%, #a8ff5f 20%, #83fff7 30%,
      #7894ff 40%, #d875ff 50%, #ff7773 60%
    );
  background-size: 300% 300%;
  background-position: var(--bg-x, 50%) var(--bg-y, 50%);
  mix-blend-mode: color-dodge;
  filter: brightness(0.6) contrast(1.2);
  opacity: calc(var(--card-opacity, 0) * 0.6);
  transition: opacity var(--transition-normal);
}

/* White highlight following the pointer */
.card-glare {
  position: absolute;
  inset: 0;
  z-index: 3;
  border-radius: 1rem;
  pointer-events: none;
  background: radial-gradient(
    farthest-corner circle at var(--pointer-x, 50%) var(--pointer-y, 50%),
    rgba(255, 255, 255, 0.8) 10%,
    rgba(255, 255, 255, 0.65) 20%,
    rgba(0, 0, 0, 0.5) 90%
  );
  mix-blend-mode: overlay;
  opacity: var(--card-opacity, 0);
  transition: opacity var(--transition-normal);
}

.holo-card__edge {
  position: absolute;
  top: 0;
  bottom: 0;
  width: 4px;
  transform: rotateY(90deg) translateZ(-2px);
}

.holo-card__edge--right {
  right: 0;
  background: rgba(255, 255, 255, 0.2);
  transform-origin: right;
}

.holo-card__edge--left {
  left: 0;
  background: rgba(0, 0, 0, 0.2);
  transform-origin: left;
}

/* === Card detail === */
.card-detail {
  position: relative;
  height: 100%;
  overflow-y: auto;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.card-detail__ambient {
  position: absolute;
  inset: 0;
  z-index: 0;
  opacity: 0.2;
  filter: blur(64px);
}

.card-detail__close {
  position: absolute;
  top: 1.5rem;
  right: 1.5rem;
  z-index: 50;
}

.card-detail__layout {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 72rem;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 3rem;
}

.card-detail__stage {
  flex: 1 1 24rem;
  display: flex;
  justify-content: center;
}

.card-detail__frame {
  width: 100%;
  max-width: 400px;
}

.card-detail__hint {
  margin-top: 1.5rem;
  text-align: center;
  font-size: 0.75rem;
  color: #737373;
  animation: pulse 2s infinite;
}

.card-detail__info {
  flex: 1 1 24rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.card-detail__tags {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 0.5rem;
}

.card-detail__types {
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  border: 1px solid currentColor;
  border-radius: 9999px;
}

.card-detail__rarity {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-muted);
}

.card-detail__name {
  font-size: 3.75rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  margin-bottom: 1rem;
}

.card-detail__quote {
  padding-left: 1.5rem;
  border-left: 4px solid rgba(255, 255, 255, 0.2);
  font-size: 1.25rem;
  font-weight: 300;
  line-height: 1.6;
  color: var(--text-secondary);
}

.stat-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.stat {
  padding: 1rem;
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid var(--canvas-border);
  border-radius: 0.75rem;
  backdrop-filter: blur(12px);
}

.stat__label {
  display: block;
  margin-bottom: 0.25rem;
  font-size: 0.75rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.stat__value {
  font-size: 1.5rem;
  font-weight: 700;
}

.stat__value--hp {
  color: var(--hp);
}

.stat__suffix {
  font-size: 0.875rem;
  color: #737373;
}

.card-detail__actions {
  display: flex;
  gap: 1rem;
  padding-top: 1rem;
}
"#;
